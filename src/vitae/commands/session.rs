//! Whole-document operations: explicit save, reload and reset.

use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DocumentStore, StorageBackend};
use tracing::warn;

pub fn save<B: StorageBackend>(store: &DocumentStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.save() {
        Ok(()) => result.add_message(CmdMessage::success("Resume saved successfully")),
        Err(e) => {
            warn!(error = %e, "explicit save failed");
            result.add_message(CmdMessage::error("Failed to save resume"));
        }
    }
    Ok(result)
}

pub fn load<B: StorageBackend>(store: &mut DocumentStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.load() {
        result.add_message(CmdMessage::success("Resume loaded successfully"));
    } else {
        result.add_message(CmdMessage::warning("No saved resume found"));
    }
    Ok(result)
}

pub fn reset<B: StorageBackend>(store: &mut DocumentStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Resume data has been reset"));
    if let Err(e) = store.reset() {
        result.absorb_persist_error(e)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Document, Skill};
    use crate::store::MemBackend;

    #[test]
    fn reset_then_load_finds_nothing() {
        let backend = MemBackend::new();
        let mut store = DocumentStore::open(backend.clone());
        store.add(Skill::default()).unwrap();

        reset(&mut store).unwrap();
        assert_eq!(store.document(), &Document::default());

        let result = load(&mut store).unwrap();
        assert_eq!(result.messages, vec![CmdMessage::warning("No saved resume found")]);
    }

    #[test]
    fn save_reports_failure() {
        let backend = MemBackend::new();
        let store = DocumentStore::open(backend.clone());
        backend.set_simulate_write_error(true);

        let result = save(&store).unwrap();
        assert_eq!(result.messages, vec![CmdMessage::error("Failed to save resume")]);

        backend.set_simulate_write_error(false);
        let result = save(&store).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(backend.contents().is_some());
    }
}
