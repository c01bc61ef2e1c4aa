use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Template;
use crate::store::{DocumentStore, StorageBackend};

pub fn show<B: StorageBackend>(store: &DocumentStore<B>) -> Result<CmdResult> {
    Ok(CmdResult {
        template: Some(store.document().template),
        ..Default::default()
    })
}

pub fn set<B: StorageBackend>(store: &mut DocumentStore<B>, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let template = match name.parse::<Template>() {
        Ok(t) => t,
        Err(e) => {
            result.reject(e);
            return Ok(result);
        }
    };

    result.template = Some(template);
    result.add_message(CmdMessage::success("Template updated successfully"));
    if let Err(e) = store.set_template(template) {
        result.absorb_persist_error(e)?;
    }
    Ok(result)
}
