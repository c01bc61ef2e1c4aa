use super::{check_date, optional, require, FieldError, FieldErrorKind, FormField, FormRecord};
use crate::model::Education;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
    Location,
    Description,
    Gpa,
}

impl FormField for EducationField {
    const ALL: &'static [Self] = &[
        EducationField::Institution,
        EducationField::Degree,
        EducationField::Field,
        EducationField::StartDate,
        EducationField::EndDate,
        EducationField::Location,
        EducationField::Description,
        EducationField::Gpa,
    ];

    fn name(&self) -> &'static str {
        match self {
            EducationField::Institution => "institution",
            EducationField::Degree => "degree",
            EducationField::Field => "field",
            EducationField::StartDate => "startDate",
            EducationField::EndDate => "endDate",
            EducationField::Location => "location",
            EducationField::Description => "description",
            EducationField::Gpa => "gpa",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EducationField::Institution => "Institution",
            EducationField::Degree => "Degree",
            EducationField::Field => "Field of study",
            EducationField::StartDate => "Start date",
            EducationField::EndDate => "End date",
            EducationField::Location => "Location",
            EducationField::Description => "Description",
            EducationField::Gpa => "GPA",
        }
    }
}

impl FormRecord for Education {
    type Field = EducationField;

    fn set_field(&mut self, field: EducationField, value: &str) -> Result<(), FieldErrorKind> {
        let value = value.to_string();
        match field {
            EducationField::Institution => self.institution = value,
            EducationField::Degree => self.degree = value,
            EducationField::Field => self.field = value,
            EducationField::StartDate => self.start_date = value,
            EducationField::EndDate => self.end_date = value,
            EducationField::Location => self.location = value,
            EducationField::Description => self.description = value,
            EducationField::Gpa => self.gpa = optional(&value),
        }
        Ok(())
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, EducationField::Institution.label(), &self.institution);
        require(&mut errors, EducationField::Degree.label(), &self.degree);
        require(&mut errors, EducationField::StartDate.label(), &self.start_date);
        check_date(&mut errors, EducationField::StartDate.label(), &self.start_date);
        check_date(&mut errors, EducationField::EndDate.label(), &self.end_date);
        errors
    }
}
