//! # Form Controllers
//!
//! A form owns a *draft*: an uncommitted copy of one record that the user edits
//! field by field. Nothing reaches the [`DocumentStore`] until [`EntryForm::submit`]
//! succeeds, and the forms are the only place where required fields and field
//! formats are checked.
//!
//! ```text
//!            begin_add                 submit (valid) / cancel
//!   Idle ─────────────────▶ Adding ───────────────────────────▶ Idle
//!     │                                                          ▲
//!     └─ begin_edit(id) ───▶ Editing(id) ────────────────────────┘
//! ```
//!
//! An invalid submit returns the field errors and leaves both the state and the
//! draft as they were, so the user can fix them and submit again.
//!
//! Each record type names its editable fields with a small enum implementing
//! [`FormField`]; [`parse_field`] turns user input such as `startDate` or
//! `start_date` into that enum.
//!
//! Personal info has no draft: [`PersonalInfoForm`] validates and applies single
//! field changes directly, the way the personal details page always did.

use crate::error::VitaeError;
use crate::format::{is_valid_email, parse_date};
use crate::id::Id;
use crate::model::Record;
use crate::store::{DocumentStore, StorageBackend};
use std::fmt;
use thiserror::Error;
use tracing::debug;

mod education;
mod experience;
mod personal;
mod project;
mod skill;

pub use education::EducationField;
pub use experience::ExperienceField;
pub use personal::{PersonalField, PersonalInfoForm};
pub use project::ProjectField;
pub use skill::SkillField;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Adding,
    Editing(Id),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("is required")]
    Required,
    #[error("must be a date like 2020-09-01 or 2020-09")]
    InvalidDate,
    #[error("must be a valid email address")]
    InvalidEmail,
    #[error("must be a whole number from 1 to 5")]
    InvalidLevel,
    #[error("must be true or false")]
    InvalidFlag,
    #[error("is not a field of this form")]
    UnknownField,
    #[error("is a list, add or drop items instead")]
    ListField,
    #[error("is not a list")]
    NotAList,
    #[error("has no item {0}")]
    NoSuchItem(usize),
}

/// A problem with one field, reported inline next to that field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {kind}")]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Nothing to submit: start adding or editing first")]
    NotActive,

    #[error("{}", join_errors(.0))]
    Invalid(Vec<FieldError>),

    /// The entry being edited was removed before the edit was submitted.
    #[error("The entry being edited no longer exists")]
    EntryMissing(Id),

    #[error(transparent)]
    Store(#[from] VitaeError),
}

impl FormError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An editable field of a record.
pub trait FormField: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// camelCase name as stored on disk ("startDate").
    fn name(&self) -> &'static str;

    /// Human label used in messages ("Start date").
    fn label(&self) -> &'static str;

    fn is_list(&self) -> bool {
        false
    }
}

/// Looks a field up by name, ignoring case, `_` and `-`.
pub fn parse_field<F: FormField>(input: &str) -> Result<F, FieldError> {
    let wanted = squash(input);
    F::ALL
        .iter()
        .copied()
        .find(|f| squash(f.name()) == wanted)
        .ok_or_else(|| FieldError::new(input.trim(), FieldErrorKind::UnknownField))
}

fn squash(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A record type that can be edited through an [`EntryForm`].
pub trait FormRecord: Record {
    type Field: FormField;

    /// Sets a scalar field from user input.
    fn set_field(&mut self, field: Self::Field, value: &str) -> Result<(), FieldErrorKind>;

    fn list_mut(&mut self, _field: Self::Field) -> Option<&mut Vec<String>> {
        None
    }

    /// Every problem that blocks submission, in field order.
    fn validate(&self) -> Vec<FieldError>;

    /// Drops blank items from list fields.
    fn prune(&mut self) {
        for field in Self::Field::ALL.iter().filter(|f| f.is_list()) {
            if let Some(items) = self.list_mut(*field) {
                items.retain(|item| !item.trim().is_empty());
            }
        }
    }
}

/// Draft state machine for one collection.
#[derive(Debug, Default)]
pub struct EntryForm<R: FormRecord> {
    state: FormState,
    draft: R,
}

impl<R: FormRecord> EntryForm<R> {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
            draft: R::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn is_active(&self) -> bool {
        self.state != FormState::Idle
    }

    pub fn begin_add(&mut self) {
        self.draft = R::default();
        self.state = FormState::Adding;
    }

    /// Loads the committed entry into the draft. Returns false, leaving the form
    /// untouched, when no entry has `id`.
    pub fn begin_edit<B: StorageBackend>(&mut self, store: &DocumentStore<B>, id: &Id) -> bool {
        match store.get::<R>(id) {
            Some(entry) => {
                self.draft = entry.data.clone();
                self.state = FormState::Editing(id.clone());
                true
            }
            None => {
                debug!(kind = %R::KIND, id = %id, "cannot edit, no such entry");
                false
            }
        }
    }

    pub fn change(&mut self, field: R::Field, value: &str) -> Result<(), FieldError> {
        if field.is_list() {
            return Err(FieldError::new(field.label(), FieldErrorKind::ListField));
        }
        self.draft
            .set_field(field, value)
            .map_err(|kind| FieldError::new(field.label(), kind))
    }

    pub fn append_item(&mut self, field: R::Field, value: &str) -> Result<(), FieldError> {
        self.list(field)?.push(value.trim().to_string());
        Ok(())
    }

    pub fn set_item(&mut self, field: R::Field, index: usize, value: &str) -> Result<(), FieldError> {
        let items = self.list(field)?;
        match items.get_mut(index) {
            Some(item) => {
                *item = value.trim().to_string();
                Ok(())
            }
            None => Err(FieldError::new(
                field.label(),
                FieldErrorKind::NoSuchItem(index + 1),
            )),
        }
    }

    pub fn remove_item(&mut self, field: R::Field, index: usize) -> Result<(), FieldError> {
        let items = self.list(field)?;
        if index >= items.len() {
            return Err(FieldError::new(
                field.label(),
                FieldErrorKind::NoSuchItem(index + 1),
            ));
        }
        items.remove(index);
        Ok(())
    }

    /// Validates the draft and commits it: `update` when editing, `add` when adding.
    ///
    /// On success the form returns to idle with an empty draft. A failed write is
    /// still a commit (the store keeps the change in memory), so the form resets
    /// then too and hands back the storage error.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &mut DocumentStore<B>,
    ) -> Result<Id, FormError> {
        if self.state == FormState::Idle {
            return Err(FormError::NotActive);
        }

        let errors = self.draft.validate();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let mut record = std::mem::take(&mut self.draft);
        record.prune();
        let state = std::mem::take(&mut self.state);

        match state {
            FormState::Editing(id) => match store.update::<R>(&id, record.into_patch()) {
                Ok(true) => Ok(id),
                Ok(false) => Err(FormError::EntryMissing(id)),
                Err(e) => Err(FormError::Store(e)),
            },
            _ => store.add(record).map_err(FormError::Store),
        }
    }

    /// Discards the draft. The committed document is not touched.
    pub fn cancel(&mut self) {
        self.draft = R::default();
        self.state = FormState::Idle;
    }

    fn list(&mut self, field: R::Field) -> Result<&mut Vec<String>, FieldError> {
        self.draft
            .list_mut(field)
            .ok_or_else(|| FieldError::new(field.label(), FieldErrorKind::NotAList))
    }
}

pub(crate) fn require(errors: &mut Vec<FieldError>, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(label, FieldErrorKind::Required));
    }
}

/// Dates are optional unless `require` says otherwise, but must parse when given.
pub(crate) fn check_date(errors: &mut Vec<FieldError>, label: &str, value: &str) {
    if !value.trim().is_empty() && parse_date(value).is_none() {
        errors.push(FieldError::new(label, FieldErrorKind::InvalidDate));
    }
}

pub(crate) fn check_email(errors: &mut Vec<FieldError>, label: &str, value: &str) {
    if !value.trim().is_empty() && !is_valid_email(value.trim()) {
        errors.push(FieldError::new(label, FieldErrorKind::InvalidEmail));
    }
}

pub(crate) fn parse_flag(value: &str) -> Result<bool, FieldErrorKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" | "" => Ok(false),
        _ => Err(FieldErrorKind::InvalidFlag),
    }
}

/// Empty input clears an optional field.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
