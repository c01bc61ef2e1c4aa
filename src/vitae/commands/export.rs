use super::{CmdMessage, CmdResult};
use crate::error::{Result, VitaeError};
use crate::export::ExportFormat;
use crate::render::Renderer;
use crate::store::{DocumentStore, StorageBackend};

/// Produces the export file in memory. Writing it out is the caller's job.
pub fn run<B: StorageBackend>(
    store: &DocumentStore<B>,
    renderer: &Renderer,
    format: ExportFormat,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match format.exporter().export(store.document(), renderer) {
        Ok(file) => {
            result.add_message(CmdMessage::success(format!(
                "Resume exported as {}",
                file.file_name
            )));
            result.exported = Some(file);
        }
        Err(e @ VitaeError::EmptyResume) => result.reject(e.to_string()),
        Err(e) => return Err(e),
    }
    Ok(result)
}
