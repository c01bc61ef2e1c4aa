use super::{check_date, optional, require, FieldError, FieldErrorKind, FormField, FormRecord};
use crate::model::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    StartDate,
    EndDate,
    Url,
    Technologies,
}

impl FormField for ProjectField {
    const ALL: &'static [Self] = &[
        ProjectField::Name,
        ProjectField::Description,
        ProjectField::StartDate,
        ProjectField::EndDate,
        ProjectField::Url,
        ProjectField::Technologies,
    ];

    fn name(&self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::Description => "description",
            ProjectField::StartDate => "startDate",
            ProjectField::EndDate => "endDate",
            ProjectField::Url => "url",
            ProjectField::Technologies => "technologies",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProjectField::Name => "Name",
            ProjectField::Description => "Description",
            ProjectField::StartDate => "Start date",
            ProjectField::EndDate => "End date",
            ProjectField::Url => "URL",
            ProjectField::Technologies => "Technologies",
        }
    }

    fn is_list(&self) -> bool {
        matches!(self, ProjectField::Technologies)
    }
}

impl FormRecord for Project {
    type Field = ProjectField;

    fn set_field(&mut self, field: ProjectField, value: &str) -> Result<(), FieldErrorKind> {
        match field {
            ProjectField::Name => self.name = value.to_string(),
            ProjectField::Description => self.description = value.to_string(),
            ProjectField::StartDate => self.start_date = value.to_string(),
            ProjectField::EndDate => self.end_date = value.to_string(),
            ProjectField::Url => self.url = optional(value),
            ProjectField::Technologies => return Err(FieldErrorKind::ListField),
        }
        Ok(())
    }

    fn list_mut(&mut self, field: ProjectField) -> Option<&mut Vec<String>> {
        match field {
            ProjectField::Technologies => Some(&mut self.technologies),
            _ => None,
        }
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, ProjectField::Name.label(), &self.name);
        require(&mut errors, ProjectField::Description.label(), &self.description);
        check_date(&mut errors, ProjectField::StartDate.label(), &self.start_date);
        check_date(&mut errors, ProjectField::EndDate.label(), &self.end_date);
        errors
    }
}
