//! Markdown renderer with container blocks and a replaceable highlighter.

use portal_config::{ContainerOptions, SiteConfig};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::container::CustomBlock;
use crate::extend::extend_markdown;
use crate::highlight::{Highlighter, PlainHighlighter};
use crate::processor::ContainerProcessor;

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Warnings generated during rendering (e.g., unclosed containers).
    pub warnings: Vec<String>,
}

/// Markdown renderer.
///
/// Container blocks are expanded before parsing; fenced and indented code
/// goes through the configured [`Highlighter`]. Everything else uses
/// pulldown-cmark's HTML writer.
pub struct MarkdownRenderer {
    containers: Vec<ContainerOptions>,
    highlighter: Box<dyn Highlighter>,
    gfm: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with the plain highlighter and GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
            highlighter: Box::new(PlainHighlighter),
            gfm: true,
        }
    }

    /// Renderer set up from site configuration: every container plugin is
    /// registered and the `extendMarkdown` hook is applied.
    #[must_use]
    pub fn from_site(config: &SiteConfig) -> Self {
        let mut md = config
            .containers()
            .cloned()
            .fold(Self::new(), Self::with_container);
        extend_markdown(&mut md, &config.markdown);
        md
    }

    /// Register a container block type.
    #[must_use]
    pub fn with_container(mut self, options: ContainerOptions) -> Self {
        self.containers.push(options);
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Current highlighter.
    pub fn highlighter(&self) -> &dyn Highlighter {
        self.highlighter.as_ref()
    }

    /// Replace the highlighter with one built from the current one.
    pub fn map_highlighter<F, H>(&mut self, wrap: F)
    where
        F: FnOnce(Box<dyn Highlighter>) -> H,
        H: Highlighter + 'static,
    {
        let original = std::mem::replace(&mut self.highlighter, Box::new(PlainHighlighter));
        self.highlighter = Box::new(wrap(original));
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to HTML.
    pub fn render(&self, markdown: &str) -> RenderResult {
        let mut processor = self
            .containers
            .iter()
            .cloned()
            .fold(ContainerProcessor::new(), |p, options| {
                p.with_container(CustomBlock::new(options))
            });
        let source = processor.process(markdown);

        let parser = Parser::new_ext(&source, self.parser_options());
        let events = highlight_code_blocks(parser, self.highlighter());

        let mut html = String::with_capacity(source.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());

        let warnings = processor.take_warnings();
        for warning in &warnings {
            tracing::warn!(warning = %warning, "Markdown rendering warning");
        }

        RenderResult { html, warnings }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace each code block's events with the highlighter's HTML.
fn highlight_code_blocks<'a>(
    parser: Parser<'a>,
    highlighter: &dyn Highlighter,
) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut code: Option<(String, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info).to_owned(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, source)) = code.take() {
                    events.push(Event::Html(highlighter.highlight(&source, &lang).into()));
                }
            }
            Event::Text(text) => match &mut code {
                Some((_, source)) => source.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            other => events.push(other),
        }
    }

    events
}

/// Language of a fence info string: `js{4,6} title` → `js`.
fn fence_language(info: &str) -> &str {
    let info = info.trim();
    let end = info
        .find(|c: char| c.is_whitespace() || c == '{')
        .unwrap_or(info.len());
    &info[..end]
}
