use super::{check_date, parse_flag, require, FieldError, FieldErrorKind, FormField, FormRecord};
use crate::model::Experience;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Current,
    Location,
    Description,
    Highlights,
}

impl FormField for ExperienceField {
    const ALL: &'static [Self] = &[
        ExperienceField::Company,
        ExperienceField::Position,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
        ExperienceField::Current,
        ExperienceField::Location,
        ExperienceField::Description,
        ExperienceField::Highlights,
    ];

    fn name(&self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Position => "position",
            ExperienceField::StartDate => "startDate",
            ExperienceField::EndDate => "endDate",
            ExperienceField::Current => "current",
            ExperienceField::Location => "location",
            ExperienceField::Description => "description",
            ExperienceField::Highlights => "highlights",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExperienceField::Company => "Company",
            ExperienceField::Position => "Position",
            ExperienceField::StartDate => "Start date",
            ExperienceField::EndDate => "End date",
            ExperienceField::Current => "Current",
            ExperienceField::Location => "Location",
            ExperienceField::Description => "Description",
            ExperienceField::Highlights => "Highlights",
        }
    }

    fn is_list(&self) -> bool {
        matches!(self, ExperienceField::Highlights)
    }
}

impl FormRecord for Experience {
    type Field = ExperienceField;

    fn set_field(&mut self, field: ExperienceField, value: &str) -> Result<(), FieldErrorKind> {
        match field {
            ExperienceField::Company => self.company = value.to_string(),
            ExperienceField::Position => self.position = value.to_string(),
            ExperienceField::StartDate => self.start_date = value.to_string(),
            ExperienceField::EndDate => self.end_date = value.to_string(),
            ExperienceField::Current => self.current = parse_flag(value)?,
            ExperienceField::Location => self.location = value.to_string(),
            ExperienceField::Description => self.description = value.to_string(),
            ExperienceField::Highlights => return Err(FieldErrorKind::ListField),
        }
        Ok(())
    }

    fn list_mut(&mut self, field: ExperienceField) -> Option<&mut Vec<String>> {
        match field {
            ExperienceField::Highlights => Some(&mut self.highlights),
            _ => None,
        }
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, ExperienceField::Company.label(), &self.company);
        require(&mut errors, ExperienceField::Position.label(), &self.position);
        require(&mut errors, ExperienceField::StartDate.label(), &self.start_date);
        if !self.current {
            require(&mut errors, ExperienceField::EndDate.label(), &self.end_date);
        }
        check_date(&mut errors, ExperienceField::StartDate.label(), &self.start_date);
        if !self.current {
            check_date(&mut errors, ExperienceField::EndDate.label(), &self.end_date);
        }
        errors
    }
}
