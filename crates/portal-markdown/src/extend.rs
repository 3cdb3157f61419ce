//! The `extendMarkdown` hook.

use portal_config::MarkdownConfig;

use crate::highlight::{PostProcess, annotate_line_numbers, compose, pass_through};
use crate::renderer::MarkdownRenderer;

/// Signature of a hook that customizes the renderer after construction.
pub type ExtendMarkdown = fn(&mut MarkdownRenderer, &MarkdownConfig);

/// Wrap the renderer's highlighter with the site's code block decoration.
///
/// The previous highlighter is always called first. Line numbers are added
/// only when `line_numbers` is enabled; otherwise output is unchanged.
pub fn extend_markdown(md: &mut MarkdownRenderer, config: &MarkdownConfig) {
    let post_process: PostProcess = if config.line_numbers {
        annotate_line_numbers
    } else {
        pass_through
    };
    tracing::debug!(line_numbers = config.line_numbers, "Extending markdown highlighter");
    md.map_highlighter(|original| compose(original, post_process));
}
