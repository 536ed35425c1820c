//! Grounded context assembly.
//!
//! Renders ranked documents into one text block for the generation prompt.
//! Block order follows ranking order, so the best match comes first.

use sift_core::config::defaults::DEFAULT_CONTEXT_SEPARATOR;
use sift_core::constants::CONTEXT_DOCUMENT_LABEL;
use sift_core::models::ScoredDocument;

/// Assemble context with the default `---` separator.
///
/// An empty selection yields an empty string.
pub fn assemble(selected: &[ScoredDocument]) -> String {
    assemble_with_separator(selected, DEFAULT_CONTEXT_SEPARATOR)
}

/// Assemble context, joining document blocks with `separator`.
pub fn assemble_with_separator(selected: &[ScoredDocument], separator: &str) -> String {
    selected
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_block(scored: &ScoredDocument) -> String {
    format!(
        "{CONTEXT_DOCUMENT_LABEL}{}\n{}",
        scored.document.name, scored.document.content
    )
}
