//! Markdown rendering for the documentation portal.
//!
//! [`MarkdownRenderer`] turns page markdown into HTML. Two extension points
//! come from site configuration:
//!
//! - container blocks (`::: info Title` ... `:::`) registered by the container
//!   plugin, expanded by [`ContainerProcessor`] before parsing;
//! - code highlighting through a [`Highlighter`], decorated by the
//!   [`extend_markdown`] hook.
//!
//! # Example
//!
//! ```
//! use portal_config::SiteConfig;
//! use portal_markdown::MarkdownRenderer;
//!
//! let md = MarkdownRenderer::from_site(&SiteConfig::builtin());
//! let result = md.render("::: info Nota\nTexto\n:::\n");
//! assert!(result.html.contains("custom-block info"));
//! ```

mod container;
mod extend;
mod fence;
mod highlight;
mod processor;
mod renderer;
mod util;

pub use container::{ContainerDirective, CustomBlock};
pub use extend::{ExtendMarkdown, extend_markdown};
pub use highlight::{
    Composed, Highlighter, PlainHighlighter, PostProcess, annotate_line_numbers, compose,
    pass_through,
};
pub use processor::ContainerProcessor;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use util::escape_html;
