use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::forms::{parse_field, FormError, PersonalField, PersonalInfoForm};
use crate::store::{DocumentStore, StorageBackend};

/// Shows personal info and reminds about required fields that are still blank.
pub fn show<B: StorageBackend>(store: &DocumentStore<B>) -> Result<CmdResult> {
    let info = store.document().personal_info.clone();
    let mut result = CmdResult::default();
    for missing in PersonalInfoForm::missing_required(&info) {
        result.add_message(CmdMessage::warning(missing.to_string()));
    }
    result.personal = Some(info);
    Ok(result)
}

/// Applies `field=value` pairs in order. Invalid pairs are reported and skipped;
/// valid ones are kept.
pub fn update<B: StorageBackend>(
    store: &mut DocumentStore<B>,
    changes: &[(String, String)],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut applied = 0;

    for (name, value) in changes {
        let field = match parse_field::<PersonalField>(name) {
            Ok(field) => field,
            Err(e) => {
                result.reject(e.to_string());
                continue;
            }
        };
        match PersonalInfoForm::change(store, field, value) {
            Ok(()) => applied += 1,
            Err(FormError::Store(e)) => {
                applied += 1;
                result.absorb_persist_error(e)?;
            }
            Err(e) => result.reject(e.to_string()),
        }
    }

    if applied > 0 {
        result.messages.insert(
            0,
            CmdMessage::success("Personal information updated successfully"),
        );
    }
    result.personal = Some(store.document().personal_info.clone());
    Ok(result)
}
