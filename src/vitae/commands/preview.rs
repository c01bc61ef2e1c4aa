use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Template;
use crate::render::Renderer;
use crate::store::{DocumentStore, StorageBackend};

/// Renders the resume with `template`, or with the selected one when `None`.
pub fn run<B: StorageBackend>(
    store: &DocumentStore<B>,
    renderer: &Renderer,
    template: Option<Template>,
) -> Result<CmdResult> {
    let doc = store.document();
    let mut result = CmdResult::default();

    if doc.is_empty() {
        result.add_message(CmdMessage::info(
            "No resume data yet. Start with `vitae info --set fullName=...` to see a preview.",
        ));
        return Ok(result);
    }

    let template = template.unwrap_or(doc.template);
    result.rendered = Some(renderer.render_with(doc, template)?);
    result.template = Some(template);
    Ok(result)
}
