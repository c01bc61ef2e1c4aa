use super::{check_email, optional, require, FieldError, FormField};
use crate::model::{PersonalInfo, PersonalInfoPatch};
use crate::store::{DocumentStore, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Title,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Summary,
    Linkedin,
    Website,
    Github,
}

impl FormField for PersonalField {
    const ALL: &'static [Self] = &[
        PersonalField::FullName,
        PersonalField::Title,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::Address,
        PersonalField::City,
        PersonalField::State,
        PersonalField::ZipCode,
        PersonalField::Summary,
        PersonalField::Linkedin,
        PersonalField::Website,
        PersonalField::Github,
    ];

    fn name(&self) -> &'static str {
        match self {
            PersonalField::FullName => "fullName",
            PersonalField::Title => "title",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Address => "address",
            PersonalField::City => "city",
            PersonalField::State => "state",
            PersonalField::ZipCode => "zipCode",
            PersonalField::Summary => "summary",
            PersonalField::Linkedin => "linkedin",
            PersonalField::Website => "website",
            PersonalField::Github => "github",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PersonalField::FullName => "Full name",
            PersonalField::Title => "Professional title",
            PersonalField::Email => "Email",
            PersonalField::Phone => "Phone",
            PersonalField::Address => "Address",
            PersonalField::City => "City",
            PersonalField::State => "State",
            PersonalField::ZipCode => "ZIP code",
            PersonalField::Summary => "Professional summary",
            PersonalField::Linkedin => "LinkedIn",
            PersonalField::Website => "Website",
            PersonalField::Github => "GitHub",
        }
    }
}

impl PersonalField {
    pub fn value<'a>(&self, info: &'a PersonalInfo) -> &'a str {
        match self {
            PersonalField::FullName => &info.full_name,
            PersonalField::Title => &info.title,
            PersonalField::Email => &info.email,
            PersonalField::Phone => &info.phone,
            PersonalField::Address => &info.address,
            PersonalField::City => &info.city,
            PersonalField::State => &info.state,
            PersonalField::ZipCode => &info.zip_code,
            PersonalField::Summary => &info.summary,
            PersonalField::Linkedin => info.linkedin.as_deref().unwrap_or(""),
            PersonalField::Website => info.website.as_deref().unwrap_or(""),
            PersonalField::Github => info.github.as_deref().unwrap_or(""),
        }
    }

    fn patch(&self, value: &str) -> PersonalInfoPatch {
        let text = Some(value.to_string());
        let mut patch = PersonalInfoPatch::default();
        match self {
            PersonalField::FullName => patch.full_name = text,
            PersonalField::Title => patch.title = text,
            PersonalField::Email => patch.email = Some(value.trim().to_string()),
            PersonalField::Phone => patch.phone = text,
            PersonalField::Address => patch.address = text,
            PersonalField::City => patch.city = text,
            PersonalField::State => patch.state = text,
            PersonalField::ZipCode => patch.zip_code = text,
            PersonalField::Summary => patch.summary = text,
            PersonalField::Linkedin => patch.linkedin = Some(optional(value)),
            PersonalField::Website => patch.website = Some(optional(value)),
            PersonalField::Github => patch.github = Some(optional(value)),
        }
        patch
    }
}

/// Edits the committed personal info one field at a time.
///
/// There is no draft: a valid change is merged into the store immediately.
/// Required fields may be left blank while the user works; [`missing_required`]
/// tells which ones still need filling.
///
/// [`missing_required`]: PersonalInfoForm::missing_required
pub struct PersonalInfoForm;

impl PersonalInfoForm {
    pub const REQUIRED: [PersonalField; 4] = [
        PersonalField::FullName,
        PersonalField::Title,
        PersonalField::Email,
        PersonalField::Summary,
    ];

    /// Validates `value` for `field` and merges it. A malformed email is rejected
    /// and the stored record left unchanged.
    pub fn change<B: StorageBackend>(
        store: &mut DocumentStore<B>,
        field: PersonalField,
        value: &str,
    ) -> Result<(), super::FormError> {
        if field == PersonalField::Email {
            let mut errors = Vec::new();
            check_email(&mut errors, field.label(), value);
            if !errors.is_empty() {
                return Err(super::FormError::Invalid(errors));
            }
        }
        store.update_personal_info(field.patch(value))?;
        Ok(())
    }

    /// Required fields that are still blank, plus a malformed email if present.
    pub fn missing_required(info: &PersonalInfo) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in Self::REQUIRED {
            require(&mut errors, field.label(), field.value(info));
        }
        check_email(&mut errors, PersonalField::Email.label(), &info.email);
        errors
    }
}
