use super::backend::StorageBackend;
use super::persist::Persister;
use crate::error::{Result, VitaeError};
use crate::id::{new_id, Id};
use crate::model::{Document, Entry, PersonalInfoPatch, Record, Template};
use tracing::{debug, info, warn};

/// Sole holder of the resume document.
///
/// Every mutation is applied in memory first and then written through the
/// [`Persister`]. When the write fails the mutation is kept and the error is
/// returned as [`VitaeError::Persist`], so callers can tell the user that the
/// change only lives in this session.
pub struct DocumentStore<B: StorageBackend> {
    doc: Document,
    persister: Persister<B>,
}

impl<B: StorageBackend> DocumentStore<B> {
    /// Opens the store, hydrating from the slot when it holds a readable document.
    pub fn open(backend: B) -> Self {
        let persister = Persister::new(backend);
        let doc = match persister.load() {
            Some(doc) => {
                info!(path = %persister.backend().slot_path().display(), "loaded resume");
                doc
            }
            None => Document::default(),
        };
        Self { doc, persister }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn backend(&self) -> &B {
        self.persister.backend()
    }

    pub fn entries<R: Record>(&self) -> &[Entry<R>] {
        R::entries(&self.doc)
    }

    pub fn get<R: Record>(&self, id: &Id) -> Option<&Entry<R>> {
        R::entries(&self.doc).iter().find(|e| &e.id == id)
    }

    /// Inserts `data` at the front of its collection under a fresh id.
    pub fn add<R: Record>(&mut self, data: R) -> Result<Id> {
        let mut id = new_id();
        while self.doc.contains_id(&id) {
            id = new_id();
        }

        R::entries_mut(&mut self.doc).insert(0, Entry::new(id.clone(), data));
        debug!(kind = %R::KIND, id = %id, "added entry");
        self.persist()?;
        Ok(id)
    }

    /// Merges `patch` into the entry with `id`. Returns false when no entry matched;
    /// in that case nothing is written.
    pub fn update<R: Record>(&mut self, id: &Id, patch: R::Patch) -> Result<bool> {
        let Some(entry) = R::entries_mut(&mut self.doc)
            .iter_mut()
            .find(|e| &e.id == id)
        else {
            debug!(kind = %R::KIND, id = %id, "update ignored, no such entry");
            return Ok(false);
        };

        entry.data.merge(patch);
        debug!(kind = %R::KIND, id = %id, "updated entry");
        self.persist()?;
        Ok(true)
    }

    /// Drops the entry with `id`. Returns false when no entry matched.
    pub fn remove<R: Record>(&mut self, id: &Id) -> Result<bool> {
        let entries = R::entries_mut(&mut self.doc);
        let before = entries.len();
        entries.retain(|e| &e.id != id);

        if entries.len() == before {
            debug!(kind = %R::KIND, id = %id, "remove ignored, no such entry");
            return Ok(false);
        }

        debug!(kind = %R::KIND, id = %id, "removed entry");
        self.persist()?;
        Ok(true)
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) -> Result<()> {
        self.doc.personal_info.merge(patch);
        debug!("updated personal info");
        self.persist()
    }

    pub fn set_template(&mut self, template: Template) -> Result<()> {
        self.doc.template = template;
        debug!(template = %template, "selected template");
        self.persist()
    }

    /// Restores the default document and removes the durable slot.
    pub fn reset(&mut self) -> Result<()> {
        self.doc = Document::default();
        info!("reset resume to defaults");
        self.persister.clear().map_err(VitaeError::persist)
    }

    /// Writes the current document explicitly.
    pub fn save(&self) -> Result<()> {
        self.persist()
    }

    /// Rehydrates from the slot. Returns whether a prior document was applied;
    /// when it returns false the in-memory document is left as it was.
    pub fn load(&mut self) -> bool {
        match self.persister.load() {
            Some(doc) => {
                self.doc = doc;
                info!("reloaded resume from storage");
                true
            }
            None => false,
        }
    }

    fn persist(&self) -> Result<()> {
        self.persister.save(&self.doc).map_err(|e| {
            warn!(error = %e, "write-through failed, keeping in-memory changes");
            VitaeError::persist(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_date_range;
    use crate::model::{
        Education, EducationPatch, Experience, Language, Proficiency, Project, Skill, SkillLevel,
        SkillPatch,
    };
    use crate::store::mem_backend::MemBackend;

    fn store() -> DocumentStore<MemBackend> {
        DocumentStore::open(MemBackend::new())
    }

    fn skill(name: &str, level: u8) -> Skill {
        Skill {
            name: name.into(),
            level: SkillLevel::new(level).unwrap(),
        }
    }

    fn harvard() -> Education {
        Education {
            institution: "Harvard University".into(),
            degree: "BSc".into(),
            field: "Computer Science".into(),
            start_date: "2018-09-01".into(),
            end_date: "2022-06-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn education_scenario() {
        let mut store = store();
        let id = store.add(harvard()).unwrap();

        let entries = store.entries::<Education>();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].data, harvard());

        let e = &entries[0].data;
        assert_eq!(
            format_date_range(&e.start_date, &e.end_date, false),
            "September 2018 - June 2022"
        );
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut store = store();
        store.add(skill("Go", 3)).unwrap();
        store.add(skill("Rust", 5)).unwrap();

        let names: Vec<_> = store
            .entries::<Skill>()
            .iter()
            .map(|e| e.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Go"]);
    }

    #[test]
    fn duplicate_skill_names_are_allowed() {
        let mut store = store();
        let a = store.add(skill("Go", 3)).unwrap();
        let b = store.add(skill("Go", 3)).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.entries::<Skill>().len(), 2);
    }

    #[test]
    fn add_assigns_distinct_ids_across_collections() {
        let mut store = store();
        let mut ids = vec![
            store.add(harvard()).unwrap(),
            store.add(Experience::default()).unwrap(),
            store.add(skill("Go", 1)).unwrap(),
            store.add(Project::default()).unwrap(),
            store.add(Language::default()).unwrap(),
        ];
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn add_then_remove_restores_prior_collection() {
        let mut store = store();
        store.add(skill("Go", 3)).unwrap();
        store.add(skill("Rust", 5)).unwrap();
        let before = store.entries::<Skill>().to_vec();

        let id = store.add(skill("Zig", 2)).unwrap();
        assert!(store.remove::<Skill>(&id).unwrap());

        assert_eq!(store.entries::<Skill>(), before.as_slice());
    }

    #[test]
    fn update_merges_only_given_fields_and_keeps_id() {
        let mut store = store();
        let id = store.add(harvard()).unwrap();

        let patch = EducationPatch {
            gpa: Some(Some("3.9".into())),
            ..Default::default()
        };
        assert!(store.update::<Education>(&id, patch).unwrap());

        let entry = store.get::<Education>(&id).unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.data.gpa.as_deref(), Some("3.9"));
        assert_eq!(entry.data.institution, "Harvard University");
        assert_eq!(entry.data.start_date, "2018-09-01");
    }

    #[test]
    fn update_with_absent_id_is_a_no_op() {
        let backend = MemBackend::new();
        let mut store = DocumentStore::open(backend.clone());
        store.add(skill("Go", 3)).unwrap();
        let before = store.document().clone();
        let writes = backend.write_count();

        let patch = SkillPatch {
            name: Some("Rust".into()),
            ..Default::default()
        };
        assert!(!store.update::<Skill>(&Id::from("missing"), patch).unwrap());

        assert_eq!(store.document(), &before);
        assert_eq!(backend.write_count(), writes);
    }

    #[test]
    fn remove_with_absent_id_is_a_no_op() {
        let backend = MemBackend::new();
        let mut store = DocumentStore::open(backend.clone());
        store.add(skill("Go", 3)).unwrap();
        let before = store.document().clone();
        let writes = backend.write_count();

        assert!(!store.remove::<Skill>(&Id::from("missing")).unwrap());

        assert_eq!(store.document(), &before);
        assert_eq!(backend.write_count(), writes);
    }

    #[test]
    fn every_mutation_is_written_through() {
        let backend = MemBackend::new();
        let mut store = DocumentStore::open(backend.clone());
        store.add(harvard()).unwrap();
        store.set_template(Template::Minimal).unwrap();
        store
            .update_personal_info(PersonalInfoPatch {
                full_name: Some("Ada Lovelace".into()),
                ..Default::default()
            })
            .unwrap();

        let reopened = DocumentStore::open(backend);
        assert_eq!(reopened.document(), store.document());
        assert_eq!(reopened.document().template, Template::Minimal);
    }

    #[test]
    fn reset_restores_default_and_clears_slot() {
        let backend = MemBackend::new();
        let mut store = DocumentStore::open(backend.clone());
        store.add(harvard()).unwrap();

        store.reset().unwrap();
        assert_eq!(store.document(), &Document::default());
        assert!(backend.contents().is_none());
        assert!(!store.load());
        assert_eq!(store.document(), &Document::default());
    }

    #[test]
    fn load_replaces_in_memory_document() {
        let backend = MemBackend::new();
        let mut writer = DocumentStore::open(backend.clone());
        let mut reader = DocumentStore::open(backend);

        writer.add(skill("Go", 3)).unwrap();
        assert!(reader.entries::<Skill>().is_empty());

        assert!(reader.load());
        assert_eq!(reader.entries::<Skill>().len(), 1);
    }

    #[test]
    fn persist_failure_keeps_in_memory_mutation() {
        let backend = MemBackend::new();
        let mut store = DocumentStore::open(backend.clone());
        backend.set_simulate_write_error(true);

        let err = store.add(skill("Go", 3)).unwrap_err();
        assert!(err.is_persist());
        assert_eq!(store.entries::<Skill>().len(), 1);
        assert!(backend.contents().is_none());

        backend.set_simulate_write_error(false);
        store.save().unwrap();
        assert!(backend.contents().is_some());
    }

    #[test]
    fn malformed_slot_opens_as_default() {
        let store = DocumentStore::open(MemBackend::with_contents("[1, 2"));
        assert_eq!(store.document(), &Document::default());
    }

    #[test]
    fn unknown_template_in_slot_hydrates_as_modern() {
        let store = DocumentStore::open(MemBackend::with_contents(
            r#"{"personalInfo": {"fullName": "Ada"}, "template": "baroque"}"#,
        ));
        assert_eq!(store.document().template, Template::Modern);
        assert_eq!(store.document().personal_info.full_name, "Ada");
    }

    #[test]
    fn slot_with_a_bad_skill_keeps_everything_else_after_the_next_write() {
        let backend = MemBackend::with_contents(
            r#"{
                "personalInfo": {"fullName": "Ada Lovelace"},
                "education": [{"id": "e1", "institution": "Harvard", "degree": "BSc"}],
                "skills": [{"id": "s1", "name": "Go", "level": 9}],
                "template": "classic"
            }"#,
        );
        let mut store = DocumentStore::open(backend.clone());
        assert_eq!(store.document().personal_info.full_name, "Ada Lovelace");
        assert_eq!(store.entries::<Education>().len(), 1);
        assert_eq!(store.document().template, Template::Classic);

        store.add(skill("Rust", 4)).unwrap();

        let saved = backend.contents().unwrap();
        assert!(saved.contains("Ada Lovelace"));
        assert!(saved.contains("Harvard"));
        assert!(saved.contains("Rust"));
        assert!(!saved.contains("\"Go\""));
    }

    #[test]
    fn duplicate_ids_in_slot_stay_independent() {
        let mut store = DocumentStore::open(MemBackend::with_contents(
            r#"{"skills": [{"id": "s1", "name": "Go"}, {"id": "s1", "name": "Rust"}]}"#,
        ));
        assert!(store.remove::<Skill>(&Id::from("s1")).unwrap());
        assert_eq!(store.entries::<Skill>().len(), 1);
        assert_eq!(store.entries::<Skill>()[0].data.name, "Rust");
    }

    #[test]
    fn reserved_collections_get_the_same_contracts() {
        let mut store = store();
        let id = store
            .add(Language {
                name: "French".into(),
                proficiency: Proficiency::Native,
            })
            .unwrap();
        assert_eq!(store.get::<Language>(&id).unwrap().data.name, "French");
        assert!(store.remove::<Language>(&id).unwrap());
        assert!(store.entries::<Language>().is_empty());
    }
}
