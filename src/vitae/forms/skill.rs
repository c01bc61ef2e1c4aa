use super::{require, FieldError, FieldErrorKind, FormField, FormRecord};
use crate::model::{Skill, SkillLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
    Level,
}

impl FormField for SkillField {
    const ALL: &'static [Self] = &[SkillField::Name, SkillField::Level];

    fn name(&self) -> &'static str {
        match self {
            SkillField::Name => "name",
            SkillField::Level => "level",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SkillField::Name => "Name",
            SkillField::Level => "Level",
        }
    }
}

impl FormRecord for Skill {
    type Field = SkillField;

    fn set_field(&mut self, field: SkillField, value: &str) -> Result<(), FieldErrorKind> {
        match field {
            SkillField::Name => self.name = value.to_string(),
            SkillField::Level => {
                // Out-of-range levels are rejected, never clamped.
                self.level = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(SkillLevel::new)
                    .ok_or(FieldErrorKind::InvalidLevel)?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, SkillField::Name.label(), &self.name);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::EntryForm;
    use crate::store::{DocumentStore, MemBackend};

    #[test]
    fn level_outside_range_is_rejected_and_draft_kept() {
        let mut form = EntryForm::<Skill>::new();
        form.begin_add();
        form.change(SkillField::Level, "4").unwrap();

        for bad in ["9", "0", "-1", "three", ""] {
            let err = form.change(SkillField::Level, bad).unwrap_err();
            assert_eq!(err.kind, FieldErrorKind::InvalidLevel);
        }
        assert_eq!(form.draft().level.get(), 4);
    }

    #[test]
    fn rejected_level_never_reaches_the_store() {
        let mut store = DocumentStore::open(MemBackend::new());
        let mut form = EntryForm::<Skill>::new();
        form.begin_add();
        form.change(SkillField::Name, "Rust").unwrap();
        let id = form.submit(&mut store).unwrap();

        form.begin_edit(&store, &id);
        assert!(form.change(SkillField::Level, "9").is_err());
        form.submit(&mut store).unwrap();

        assert_eq!(
            store.get::<Skill>(&id).unwrap().data.level,
            SkillLevel::default()
        );
    }
}
