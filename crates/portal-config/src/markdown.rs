//! Markdown processing options.

use serde::{Deserialize, Serialize};

/// Options for the markdown pipeline.
///
/// The `extendMarkdown` hook itself lives with the renderer in
/// `portal-markdown`; this carries only the data it reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct MarkdownConfig {
    /// Annotate fenced code blocks with line numbers.
    pub line_numbers: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}
