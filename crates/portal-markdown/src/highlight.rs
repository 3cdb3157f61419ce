//! Code highlighting and highlighter composition.
//!
//! The renderer hands every fenced code block to a [`Highlighter`]. Extra
//! behavior is layered on with [`compose`], which always calls through to
//! the original and post-processes its output; it never replaces it.

use std::fmt::Write;

use crate::util::escape_html;

/// Turns a code block into an embeddable HTML fragment.
pub trait Highlighter: Send {
    /// Highlight raw `code` written in `lang` (empty when the fence has no
    /// info string).
    fn highlight(&self, code: &str, lang: &str) -> String;
}

impl Highlighter for Box<dyn Highlighter> {
    fn highlight(&self, code: &str, lang: &str) -> String {
        (**self).highlight(code, lang)
    }
}

/// Pure post-processor over a highlighter's output.
///
/// Receives the original output plus the input it was produced from.
pub type PostProcess = fn(String, &str, &str) -> String;

/// Default highlighter: escaped code in `<pre><code>`, with a
/// `language-*` class when the language is known.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, lang: &str) -> String {
        let mut out = String::with_capacity(code.len() + 48);
        if lang.is_empty() {
            write!(out, "<pre><code>{}</code></pre>", escape_html(code)).unwrap();
        } else {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(code)
            )
            .unwrap();
        }
        out
    }
}

/// Highlighter that decorates another one.
pub struct Composed<H> {
    original: H,
    post_process: PostProcess,
}

impl<H: Highlighter> Highlighter for Composed<H> {
    fn highlight(&self, code: &str, lang: &str) -> String {
        (self.post_process)(self.original.highlight(code, lang), code, lang)
    }
}

/// Wrap `original` so its output goes through `post_process`.
pub fn compose<H: Highlighter>(original: H, post_process: PostProcess) -> Composed<H> {
    Composed {
        original,
        post_process,
    }
}

/// Append a line-number gutter to highlighted output.
///
/// Blocks without a language are returned unchanged.
pub fn annotate_line_numbers(output: String, code: &str, lang: &str) -> String {
    if lang.is_empty() {
        return output;
    }

    let lines = code.strip_suffix('\n').unwrap_or(code).split('\n').count();
    let mut out = String::with_capacity(output.len() + lines * 40 + 96);
    write!(
        out,
        r#"<div class="language-{} line-numbers-mode">{output}<div class="line-numbers-wrapper">"#,
        escape_html(lang)
    )
    .unwrap();
    for n in 1..=lines {
        write!(out, r#"<span class="line-number">{n}</span><br>"#).unwrap();
    }
    out.push_str("</div></div>");
    out
}

/// Identity post-processor.
pub fn pass_through(output: String, _code: &str, _lang: &str) -> String {
    output
}
