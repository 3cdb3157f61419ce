//! Terminal output for the portal commands.

use console::{Style, Term};

/// How a diagnostic line is styled.
#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Heading,
    Ok,
    Warn,
    Fail,
}

impl Tone {
    fn style(self) -> Option<Style> {
        match self {
            Self::Plain => None,
            Self::Heading => Some(Style::new().cyan().bold()),
            Self::Ok => Some(Style::new().green()),
            Self::Warn => Some(Style::new().yellow()),
            Self::Fail => Some(Style::new().red()),
        }
    }
}

/// Splits command results (stdout, unstyled, pipeable) from diagnostics
/// (stderr, colored when the terminal supports it).
pub(crate) struct Output {
    results: Term,
    diagnostics: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            results: Term::stdout(),
            diagnostics: Term::stderr(),
        }
    }

    /// Write a command result: JSON, HTML, an outline line.
    pub(crate) fn result(&self, text: &str) {
        let _ = self.results.write_line(text);
    }

    pub(crate) fn note(&self, msg: &str) {
        self.diagnostic(Tone::Plain, msg);
    }

    pub(crate) fn heading(&self, msg: &str) {
        self.diagnostic(Tone::Heading, msg);
    }

    pub(crate) fn ok(&self, msg: &str) {
        self.diagnostic(Tone::Ok, msg);
    }

    /// Authoring or rendering warning, prefixed with `warning: `.
    pub(crate) fn warn(&self, msg: &str) {
        self.diagnostic(Tone::Warn, &format!("warning: {msg}"));
    }

    /// Fatal error, prefixed with `Error: `.
    pub(crate) fn fail(&self, msg: &str) {
        self.diagnostic(Tone::Fail, &format!("Error: {msg}"));
    }

    fn diagnostic(&self, tone: Tone, msg: &str) {
        let line = match tone.style() {
            Some(style) => style.apply_to(msg).to_string(),
            None => msg.to_owned(),
        };
        let _ = self.diagnostics.write_line(&line);
    }
}
