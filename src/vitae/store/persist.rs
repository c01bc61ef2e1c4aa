use super::backend::StorageBackend;
use crate::error::{Result, VitaeError};
use crate::model::Document;
use tracing::{debug, warn};

/// Encodes the whole document into the backend's slot and back.
///
/// Writes always replace the full document. Reads never fail. Damaged records
/// are dropped one at a time (see [`Document`]'s decoding), repeated ids are
/// renamed, and only a slot that is not a JSON object at all is reported as
/// absent.
pub struct Persister<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Persister<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn save(&self, doc: &Document) -> Result<()> {
        let content = serde_json::to_string_pretty(doc).map_err(VitaeError::Serialization)?;
        self.backend.write_slot(&content)?;
        debug!(path = %self.backend.slot_path().display(), bytes = content.len(), "saved resume");
        Ok(())
    }

    pub fn load(&self) -> Option<Document> {
        let raw = match self.backend.read_slot() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "could not read resume slot");
                return None;
            }
        };

        match serde_json::from_str::<Document>(&raw) {
            Ok(mut doc) => {
                let renamed = doc.dedupe_ids();
                if renamed > 0 {
                    warn!(renamed, "repaired duplicate entry ids");
                }
                Some(doc)
            }
            Err(e) => {
                warn!(
                    path = %self.backend.slot_path().display(),
                    error = %e,
                    "ignoring malformed resume data"
                );
                None
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove_slot()
    }

    pub fn exists(&self) -> bool {
        matches!(self.backend.read_slot(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;
    use crate::model::{
        Certificate, Education, Entry, Experience, Language, Proficiency, Project, Skill,
        SkillLevel, Template,
    };
    use crate::store::mem_backend::MemBackend;

    fn sample() -> Document {
        let mut doc = Document::default();
        let info = &mut doc.personal_info;
        info.full_name = "Grace Hopper".into();
        info.title = "Computer Scientist".into();
        info.email = "grace@example.com".into();
        info.phone = "5551234567".into();
        info.address = "1 Navy Way".into();
        info.city = "Arlington".into();
        info.state = "VA".into();
        info.zip_code = "22202".into();
        info.summary = "Compilers and COBOL.".into();
        info.linkedin = Some("linkedin.com/in/grace".into());
        info.website = Some("https://example.com".into());
        info.github = None;
        doc.template = Template::Classic;

        doc.experience.push(Entry::new(
            Id::from("exp1"),
            Experience {
                company: "US Navy".into(),
                position: "Rear Admiral".into(),
                start_date: "1943-12".into(),
                location: "Washington, DC".into(),
                description: "Led programming languages work.".into(),
                highlights: vec!["COBOL".into(), "FLOW-MATIC".into()],
                current: true,
                ..Default::default()
            },
        ));
        doc.education.push(Entry::new(
            Id::from("edu1"),
            Education {
                institution: "Yale University".into(),
                degree: "PhD".into(),
                field: "Mathematics".into(),
                start_date: "1930-09-01".into(),
                end_date: "1934-06-01".into(),
                location: "New Haven, CT".into(),
                description: "Thesis on irreducibility criteria.".into(),
                gpa: Some("4.0".into()),
            },
        ));
        doc.skills.push(Entry::new(
            Id::from("sk1"),
            Skill {
                name: "Compilers".into(),
                level: SkillLevel::new(5).unwrap(),
            },
        ));
        doc.projects.push(Entry::new(
            Id::from("pr1"),
            Project {
                name: "A-0".into(),
                description: "First compiler".into(),
                start_date: "1951-01".into(),
                end_date: "1952-05".into(),
                url: Some("https://example.com/a0".into()),
                technologies: vec!["UNIVAC I".into(), "Assembly".into()],
            },
        ));
        doc.certificates.push(Entry::new(
            Id::from("ce1"),
            Certificate {
                name: "Computer Sciences Man of the Year".into(),
                issuer: "DPMA".into(),
                date: "1969-01-01".into(),
                url: Some("https://example.com/award".into()),
            },
        ));
        doc.languages.push(Entry::new(
            Id::from("la1"),
            Language {
                name: "English".into(),
                proficiency: Proficiency::Native,
            },
        ));
        doc
    }

    #[test]
    fn save_then_load_yields_equal_document() {
        let persister = Persister::new(MemBackend::new());
        let doc = sample();
        persister.save(&doc).unwrap();
        assert_eq!(persister.load(), Some(doc));
    }

    #[test]
    fn one_bad_entry_does_not_discard_the_rest() {
        let persister = Persister::new(MemBackend::with_contents(
            r#"{
                "personalInfo": {"fullName": "Ada Lovelace"},
                "education": [{"id": "e1", "institution": "Harvard", "degree": "BSc"}],
                "skills": [{"id": "s1", "name": "Go", "level": 9}],
                "template": "classic"
            }"#,
        ));

        let doc = persister.load().unwrap();
        assert_eq!(doc.personal_info.full_name, "Ada Lovelace");
        assert_eq!(doc.education[0].data.institution, "Harvard");
        assert!(doc.skills.is_empty());
        assert_eq!(doc.template, Template::Classic);
    }

    #[test]
    fn repeated_ids_are_renamed_on_load() {
        let persister = Persister::new(MemBackend::with_contents(
            r#"{"skills": [{"id": "s1", "name": "Go"}, {"id": "s1", "name": "Rust"}]}"#,
        ));

        let doc = persister.load().unwrap();
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.skills[0].id, Id::from("s1"));
        assert_ne!(doc.skills[1].id, Id::from("s1"));
    }

    #[test]
    fn load_from_empty_slot_is_absent() {
        let persister = Persister::new(MemBackend::new());
        assert!(persister.load().is_none());
        assert!(!persister.exists());
    }

    #[test]
    fn malformed_slot_is_treated_as_absent() {
        let persister = Persister::new(MemBackend::with_contents("{not json"));
        assert!(persister.load().is_none());
    }

    #[test]
    fn clear_removes_the_slot() {
        let persister = Persister::new(MemBackend::new());
        persister.save(&sample()).unwrap();
        assert!(persister.exists());

        persister.clear().unwrap();
        assert!(!persister.exists());
        assert!(persister.load().is_none());
    }

    #[test]
    fn save_reports_write_errors() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let persister = Persister::new(backend);
        assert!(persister.save(&sample()).is_err());
    }
}
