//! Container block preprocessing.
//!
//! Runs before pulldown-cmark: marker lines are replaced by the HTML their
//! handler returns, everything else passes through untouched.

use crate::container::ContainerDirective;
use crate::fence::FenceTracker;

/// Minimum number of colons in a container marker.
const MIN_MARKER_LEN: usize = 3;

/// Parsed container marker line.
#[derive(Debug, PartialEq, Eq)]
enum Marker<'a> {
    /// `::: name info`
    Open {
        name: &'a str,
        info: &'a str,
        colons: usize,
    },
    /// `:::`
    Close { colons: usize },
}

/// Indentation at which a line is indented code rather than a marker.
const CODE_INDENT: usize = 4;

/// Parse a line as a container marker.
fn parse_marker(line: &str) -> Option<Marker<'_>> {
    if leading_columns(line) >= CODE_INDENT {
        return None;
    }
    let trimmed = line.trim();
    let colons = trimmed.chars().take_while(|&c| c == ':').count();
    if colons < MIN_MARKER_LEN {
        return None;
    }

    let params = trimmed[colons..].trim();
    if params.is_empty() {
        return Some(Marker::Close { colons });
    }

    let (name, info) = params
        .split_once(char::is_whitespace)
        .map_or((params, ""), |(name, info)| (name, info.trim()));

    Some(Marker::Open { name, info, colons })
}

/// Width of leading whitespace, with tabs stopping at multiples of four.
fn leading_columns(line: &str) -> usize {
    let mut cols = 0;
    for c in line.chars() {
        match c {
            ' ' => cols += 1,
            '\t' => cols += CODE_INDENT - cols % CODE_INDENT,
            _ => break,
        }
    }
    cols
}

/// An opened block waiting for its closing marker.
struct ActiveBlock {
    /// Handler index, or `None` when no handler claimed the block.
    handler: Option<usize>,
    colons: usize,
}

/// Preprocessor for container blocks.
///
/// Blocks nest; a closing marker closes the innermost open block when it
/// has at least as many colons as that block's opening marker.
pub struct ContainerProcessor {
    handlers: Vec<Box<dyn ContainerDirective>>,
    fence: FenceTracker,
    active: Vec<ActiveBlock>,
    warnings: Vec<String>,
}

impl Default for ContainerProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            fence: FenceTracker::new(),
            active: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Register a container handler.
    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Register a boxed container handler.
    #[must_use]
    pub fn with_boxed(mut self, handler: Box<dyn ContainerDirective>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Replace container markers with handler HTML.
    ///
    /// Emitted HTML is followed by a blank line so the parser ends the raw
    /// HTML block there and reads the block body as markdown.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());

        for (idx, line) in input.lines().enumerate() {
            let line_num = idx + 1;
            self.fence.update(line);

            let replaced = if self.fence.in_fence() {
                None
            } else {
                parse_marker(line).and_then(|marker| self.dispatch(marker, line, line_num))
            };

            match replaced {
                Some(html) => {
                    output.push_str(&html);
                    output.push_str("\n\n");
                }
                None => {
                    output.push_str(line);
                    output.push('\n');
                }
            }
        }

        if !input.ends_with('\n') && output.ends_with('\n') {
            output.pop();
        }

        self.finalize();
        output
    }

    /// HTML replacing a marker line, or `None` to keep the line as text.
    fn dispatch(&mut self, marker: Marker<'_>, line: &str, line_num: usize) -> Option<String> {
        match marker {
            Marker::Open { name, info, colons } => {
                let idx = self.handlers.iter().position(|h| h.name() == name);
                let html = idx.and_then(|idx| self.handlers[idx].start(info, line_num));
                if html.is_none() {
                    // Unclaimed blocks still consume their closing marker.
                    self.active.push(ActiveBlock {
                        handler: None,
                        colons,
                    });
                    return None;
                }
                self.active.push(ActiveBlock {
                    handler: idx,
                    colons,
                });
                html
            }
            Marker::Close { colons } => {
                let Some(top) = self.active.last() else {
                    self.warnings.push(format!(
                        "line {line_num}: stray {} with no opening container",
                        line.trim()
                    ));
                    return None;
                };
                if colons < top.colons {
                    return None;
                }
                let block = self.active.pop()?;
                block
                    .handler
                    .and_then(|idx| self.handlers[idx].end(line_num))
            }
        }
    }

    fn finalize(&mut self) {
        let unclosed = self.active.drain(..).filter(|b| b.handler.is_some()).count();
        if unclosed > 0 {
            self.warnings.push(format!(
                "{unclosed} unclosed container block(s) (missing closing :::)"
            ));
        }
    }

    /// Warnings collected while processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Take collected warnings, leaving none behind.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}
