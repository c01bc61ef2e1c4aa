//! # Document Model
//!
//! A resume is a single [`Document`]: one [`PersonalInfo`] record, a handful of
//! ordered collections of identified entries, and the selected [`Template`].
//!
//! ## Entries and Records
//!
//! Collections hold [`Entry<R>`] values: an immutable [`Id`] next to the record
//! data `R`. The record type alone (`Education`, `Skill`, ...) is what callers
//! hand to `add` and what form drafts hold, so "fields without id" is simply `R`.
//! On disk an entry is flattened into one JSON object (`{"id": ..., "institution": ...}`).
//!
//! Every record type implements [`Record`], which names its patch type, knows how
//! to merge a patch, and knows which collection of the [`Document`] it lives in.
//! That trait is what lets the store expose a single generic `add`/`update`/`remove`.
//!
//! ## Patches
//!
//! Partial updates use an explicit patch struct per record (`EducationPatch`, ...)
//! in which every field is optional. `None` means "keep the current value".
//! Optional record fields (`gpa`, `url`, ...) use `Option<Option<String>>` so a
//! patch can also clear them.
//!
//! ## Serialization
//!
//! Field names are camelCase. All containers use `#[serde(default)]`, so a slot
//! written by an older build with missing fields still hydrates. The template is
//! deserialized leniently: unknown values fall back to [`Template::Modern`].

use crate::id::{new_id, Id};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

mod education;
mod experience;
mod personal;
mod project;
mod reserved;
mod skill;

pub use education::{Education, EducationPatch};
pub use experience::{Experience, ExperiencePatch};
pub use personal::{PersonalInfo, PersonalInfoPatch};
pub use project::{Project, ProjectPatch};
pub use reserved::{Certificate, CertificatePatch, Language, LanguagePatch, Proficiency};
pub use skill::{LevelOutOfRange, Skill, SkillLevel, SkillPatch};

/// The closed set of rendering variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Modern => "A contemporary design with a clean layout and bold headings.",
            Template::Classic => "A traditional layout, centered header and ruled sections.",
            Template::Minimal => "A sparse, typographic layout with understated headings.",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Template::Modern),
            "classic" => Ok(Template::Classic),
            "minimal" => Ok(Template::Minimal),
            other => Err(format!(
                "Unknown template '{}' (expected modern, classic or minimal)",
                other
            )),
        }
    }
}

fn lenient_template<'de, D>(deserializer: D) -> Result<Template, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let template = match raw.as_str().map(str::parse::<Template>) {
        Some(Ok(template)) => template,
        _ => {
            warn!(value = %raw, "ignoring unrecognized template, using default");
            Template::default()
        }
    };
    Ok(template)
}

/// Decodes a whole record, falling back to its default when the stored shape is
/// wrong.
fn lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring malformed record, using defaults");
        T::default()
    }))
}

/// Decodes a collection entry by entry. Entries that fail to decode are dropped
/// so the rest of the collection survives.
fn lenient_entries<'de, D, R>(deserializer: D) -> Result<Vec<Entry<R>>, D::Error>
where
    D: Deserializer<'de>,
    R: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = raw else {
        if !raw.is_null() {
            warn!(value = %raw, "ignoring collection that is not a list");
        }
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Entry<R>>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "dropping malformed entry");
                None
            }
        })
        .collect())
}

/// The collection an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Education,
    Experience,
    Skill,
    Project,
    Certificate,
    Language,
}

impl EntryKind {
    /// Capitalized singular label, used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Education => "Education",
            EntryKind::Experience => "Experience",
            EntryKind::Skill => "Skill",
            EntryKind::Project => "Project",
            EntryKind::Certificate => "Certificate",
            EntryKind::Language => "Language",
        }
    }

    /// Lowercase noun for a single item ("education entry", "skill").
    pub fn noun(&self) -> &'static str {
        match self {
            EntryKind::Education => "education entry",
            EntryKind::Experience => "experience entry",
            EntryKind::Skill => "skill",
            EntryKind::Project => "project",
            EntryKind::Certificate => "certificate",
            EntryKind::Language => "language",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An identified record inside one of the document's collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<R> {
    #[serde(default = "new_id")]
    pub id: Id,
    #[serde(flatten)]
    pub data: R,
}

impl<R> Entry<R> {
    pub fn new(id: Id, data: R) -> Self {
        Self { id, data }
    }
}

/// A record type stored in one of the document's collections.
pub trait Record:
    Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned
{
    /// Partial update for this record. Every field is optional.
    type Patch: Default + fmt::Debug;

    const KIND: EntryKind;

    /// Applies every field present in `patch`, leaving the rest untouched.
    fn merge(&mut self, patch: Self::Patch);

    /// A patch that overwrites every field with this record's values.
    fn into_patch(self) -> Self::Patch;

    /// One-line human description ("BSc at Harvard University").
    fn summary(&self) -> String;

    fn entries(doc: &Document) -> &Vec<Entry<Self>>;

    fn entries_mut(doc: &mut Document) -> &mut Vec<Entry<Self>>;
}

/// The root aggregate: everything that makes up one resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(deserialize_with = "lenient_record")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient_entries")]
    pub education: Vec<Entry<Education>>,
    #[serde(deserialize_with = "lenient_entries")]
    pub experience: Vec<Entry<Experience>>,
    #[serde(deserialize_with = "lenient_entries")]
    pub skills: Vec<Entry<Skill>>,
    #[serde(deserialize_with = "lenient_entries")]
    pub projects: Vec<Entry<Project>>,
    #[serde(deserialize_with = "lenient_entries")]
    pub certificates: Vec<Entry<Certificate>>,
    #[serde(deserialize_with = "lenient_entries")]
    pub languages: Vec<Entry<Language>>,
    #[serde(deserialize_with = "lenient_template")]
    pub template: Template,
}

impl Document {
    /// True when nothing worth rendering has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.personal_info.full_name.trim().is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
    }

    /// Whether any collection already uses `id`.
    pub fn contains_id(&self, id: &Id) -> bool {
        self.education.iter().any(|e| &e.id == id)
            || self.experience.iter().any(|e| &e.id == id)
            || self.skills.iter().any(|e| &e.id == id)
            || self.projects.iter().any(|e| &e.id == id)
            || self.certificates.iter().any(|e| &e.id == id)
            || self.languages.iter().any(|e| &e.id == id)
    }

    /// Gives a fresh id to every entry whose id already appeared earlier in the
    /// document. Returns how many entries were renamed.
    pub fn dedupe_ids(&mut self) -> usize {
        let mut taken: HashSet<Id> = HashSet::new();
        taken.extend(self.education.iter().map(|e| e.id.clone()));
        taken.extend(self.experience.iter().map(|e| e.id.clone()));
        taken.extend(self.skills.iter().map(|e| e.id.clone()));
        taken.extend(self.projects.iter().map(|e| e.id.clone()));
        taken.extend(self.certificates.iter().map(|e| e.id.clone()));
        taken.extend(self.languages.iter().map(|e| e.id.clone()));

        let mut seen = HashSet::new();
        rename_repeats(&mut self.education, &mut taken, &mut seen)
            + rename_repeats(&mut self.experience, &mut taken, &mut seen)
            + rename_repeats(&mut self.skills, &mut taken, &mut seen)
            + rename_repeats(&mut self.projects, &mut taken, &mut seen)
            + rename_repeats(&mut self.certificates, &mut taken, &mut seen)
            + rename_repeats(&mut self.languages, &mut taken, &mut seen)
    }
}

fn rename_repeats<R>(
    entries: &mut [Entry<R>],
    taken: &mut HashSet<Id>,
    seen: &mut HashSet<Id>,
) -> usize {
    let mut renamed = 0;
    for entry in entries.iter_mut() {
        if seen.insert(entry.id.clone()) {
            continue;
        }
        let mut id = new_id();
        while taken.contains(&id) {
            id = new_id();
        }
        warn!(old = %entry.id, new = %id, "renamed duplicate entry id");
        taken.insert(id.clone());
        seen.insert(id.clone());
        entry.id = id;
        renamed += 1;
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_fully_defined() {
        let doc = Document::default();
        assert_eq!(doc.personal_info, PersonalInfo::default());
        assert!(doc.personal_info.full_name.is_empty());
        assert!(doc.personal_info.linkedin.is_none());
        assert!(doc.education.is_empty());
        assert!(doc.languages.is_empty());
        assert_eq!(doc.template, Template::Modern);
        assert!(doc.is_empty());
    }

    #[test]
    fn document_uses_camel_case_field_names() {
        let mut doc = Document::default();
        doc.personal_info.full_name = "Ada".into();
        doc.personal_info.zip_code = "12345".into();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["personalInfo"]["fullName"], "Ada");
        assert_eq!(json["personalInfo"]["zipCode"], "12345");
        assert_eq!(json["template"], "modern");
        assert!(json["certificates"].as_array().unwrap().is_empty());
    }

    #[test]
    fn entry_is_flattened_next_to_its_id() {
        let entry = Entry::new(
            Id::from("abc"),
            Skill {
                name: "Rust".into(),
                level: SkillLevel::new(4).unwrap(),
            },
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "name": "Rust", "level": 4}));
    }

    #[test]
    fn unknown_template_falls_back_to_default() {
        let doc: Document = serde_json::from_str(r#"{"template": "fancy"}"#).unwrap();
        assert_eq!(doc.template, Template::Modern);

        let doc: Document = serde_json::from_str(r#"{"template": 7}"#).unwrap();
        assert_eq!(doc.template, Template::Modern);
    }

    #[test]
    fn known_template_is_kept() {
        let doc: Document = serde_json::from_str(r#"{"template": "minimal"}"#).unwrap();
        assert_eq!(doc.template, Template::Minimal);
    }

    #[test]
    fn missing_fields_hydrate_with_defaults() {
        let doc: Document = serde_json::from_str(
            r#"{"personalInfo": {"fullName": "Ada"}, "skills": [{"id": "s1", "name": "Go"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.personal_info.full_name, "Ada");
        assert_eq!(doc.personal_info.email, "");
        assert_eq!(doc.skills[0].data.level, SkillLevel::default());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn entry_without_id_receives_one() {
        let doc: Document =
            serde_json::from_str(r#"{"skills": [{"name": "Go", "level": 2}]}"#).unwrap();
        assert!(!doc.skills[0].id.as_str().is_empty());
    }

    #[test]
    fn bad_entries_are_dropped_and_the_rest_survives() {
        let doc: Document = serde_json::from_str(
            r#"{
                "personalInfo": {"fullName": "Ada Lovelace"},
                "education": [{"id": "e1", "institution": "Harvard", "degree": "BSc"}],
                "skills": [
                    {"id": "s1", "name": "Go", "level": 9},
                    {"id": "s2", "name": "Rust", "level": 4},
                    {"id": "s3", "name": 42}
                ],
                "projects": "not a list",
                "template": "classic"
            }"#,
        )
        .unwrap();

        assert_eq!(doc.personal_info.full_name, "Ada Lovelace");
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.skills[0].data.name, "Rust");
        assert!(doc.projects.is_empty());
        assert_eq!(doc.template, Template::Classic);
    }

    #[test]
    fn malformed_personal_info_falls_back_to_defaults() {
        let doc: Document = serde_json::from_str(
            r#"{"personalInfo": {"fullName": 7}, "skills": [{"id": "s1", "name": "Go"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.personal_info, PersonalInfo::default());
        assert_eq!(doc.skills.len(), 1);
    }

    #[test]
    fn dedupe_ids_renames_later_copies() {
        let mut doc = Document::default();
        doc.skills.push(Entry::new(Id::from("dup"), Skill::default()));
        doc.skills.push(Entry::new(Id::from("dup"), Skill::default()));
        doc.languages.push(Entry::new(Id::from("dup"), Language::default()));
        doc.education.push(Entry::new(Id::from("e1"), Education::default()));

        assert_eq!(doc.dedupe_ids(), 2);
        assert_eq!(doc.skills[0].id, Id::from("dup"));
        assert_ne!(doc.skills[1].id, Id::from("dup"));
        assert_ne!(doc.languages[0].id, Id::from("dup"));
        assert_ne!(doc.skills[1].id, doc.languages[0].id);
        assert_eq!(doc.education[0].id, Id::from("e1"));

        assert_eq!(doc.dedupe_ids(), 0);
    }

    #[test]
    fn template_parsing_is_case_insensitive() {
        assert_eq!("Classic".parse::<Template>().unwrap(), Template::Classic);
        assert!("fancy".parse::<Template>().is_err());
    }

    #[test]
    fn contains_id_searches_every_collection() {
        let mut doc = Document::default();
        doc.languages.push(Entry::new(Id::from("lang1"), Language::default()));
        assert!(doc.contains_id(&Id::from("lang1")));
        assert!(!doc.contains_id(&Id::from("nope")));
    }
}
