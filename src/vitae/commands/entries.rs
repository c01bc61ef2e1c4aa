//! Add, edit, remove and list entries of any form-backed collection.

use super::helpers::{listed_entries, resolve};
use super::{CmdMessage, CmdResult, EntryChange, Selector};
use crate::error::Result;
use crate::forms::{parse_field, EntryForm, FieldError, FieldErrorKind, FormError, FormField, FormRecord};
use crate::store::{DocumentStore, StorageBackend};

pub fn list<R: FormRecord, B: StorageBackend>(store: &DocumentStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(listed_entries::<R, B>(store)))
}

pub fn add<R: FormRecord, B: StorageBackend>(
    store: &mut DocumentStore<B>,
    changes: &[EntryChange],
) -> Result<CmdResult> {
    let mut form = EntryForm::<R>::new();
    form.begin_add();
    submit(store, form, changes, "added")
}

pub fn edit<R: FormRecord, B: StorageBackend>(
    store: &mut DocumentStore<B>,
    selector: &Selector,
    changes: &[EntryChange],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(id) = resolve::<R, B>(store, selector) else {
        result.add_message(not_found::<R>(selector));
        return Ok(result);
    };

    let mut form = EntryForm::<R>::new();
    form.begin_edit(store, &id);
    if changes.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change"));
        return Ok(result);
    }
    submit(store, form, changes, "updated")
}

pub fn remove<R: FormRecord, B: StorageBackend>(
    store: &mut DocumentStore<B>,
    selector: &Selector,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(id) = resolve::<R, B>(store, selector) else {
        result.add_message(not_found::<R>(selector));
        return Ok(result);
    };

    let removed = match store.remove::<R>(&id) {
        Ok(removed) => removed,
        Err(e) => {
            result.absorb_persist_error(e)?;
            true
        }
    };
    if removed {
        result.affected = Some(id);
        result.messages.insert(
            0,
            CmdMessage::success(format!("{} removed successfully", R::KIND.label())),
        );
    }
    Ok(result)
}

fn not_found<R: FormRecord>(selector: &Selector) -> CmdMessage {
    CmdMessage::warning(format!("No {} matches {}", R::KIND.noun(), selector))
}

fn submit<R: FormRecord, B: StorageBackend>(
    store: &mut DocumentStore<B>,
    mut form: EntryForm<R>,
    changes: &[EntryChange],
    verb: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let errors: Vec<FieldError> = changes
        .iter()
        .filter_map(|change| apply(&mut form, change).err())
        .collect();
    if !errors.is_empty() {
        reject_all(&mut result, &errors);
        return Ok(result);
    }

    match form.submit(store) {
        Ok(id) => {
            result.affected = Some(id);
            result.add_message(CmdMessage::success(format!(
                "{} {} successfully",
                R::KIND.label(),
                verb
            )));
        }
        Err(FormError::Invalid(errors)) => reject_all(&mut result, &errors),
        Err(FormError::Store(e)) => {
            result.add_message(CmdMessage::success(format!(
                "{} {} successfully",
                R::KIND.label(),
                verb
            )));
            result.absorb_persist_error(e)?;
        }
        Err(e @ FormError::NotActive) | Err(e @ FormError::EntryMissing(_)) => {
            result.add_message(CmdMessage::warning(e.to_string()));
        }
    }
    Ok(result)
}

fn apply<R: FormRecord>(form: &mut EntryForm<R>, change: &EntryChange) -> std::result::Result<(), FieldError> {
    match change {
        EntryChange::Set(name, value) => form.change(parse_field::<R::Field>(name)?, value),
        EntryChange::Push(name, value) => form.append_item(parse_field::<R::Field>(name)?, value),
        EntryChange::Drop(name, position) => {
            let field = parse_field::<R::Field>(name)?;
            match position.checked_sub(1) {
                Some(index) => form.remove_item(field, index),
                None => Err(FieldError::new(field.label(), FieldErrorKind::NoSuchItem(0))),
            }
        }
    }
}

fn reject_all(result: &mut CmdResult, errors: &[FieldError]) {
    for error in errors {
        result.reject(error.to_string());
    }
}
