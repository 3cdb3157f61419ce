//! `portal render` command implementation.

use std::path::PathBuf;

use clap::Args;
use portal_config::{CliSettings, SiteConfig};
use portal_markdown::MarkdownRenderer;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Path to configuration file (default: auto-discover portal.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not annotate code blocks with line numbers.
    #[arg(long)]
    no_line_numbers: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the file
    /// cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            line_numbers: self.no_line_numbers.then_some(false),
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        let markdown_text = std::fs::read_to_string(&self.markdown_file)?;
        output.note(&format!("Rendering {}...", self.markdown_file.display()));

        tracing::debug!(
            line_numbers = config.markdown.line_numbers,
            containers = config.containers().count(),
            "Building markdown renderer"
        );
        let result = MarkdownRenderer::from_site(&config).render(&markdown_text);
        for warning in &result.warnings {
            output.warn(warning);
        }
        output.result(&result.html);
        Ok(())
    }
}
