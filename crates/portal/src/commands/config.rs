//! `portal config` command implementation.

use std::path::PathBuf;

use clap::Args;
use portal_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover portal.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl ConfigArgs {
    /// Execute the config command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or resolved.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = SiteConfig::load(self.config.as_deref(), None)?;
        let json = config.to_generator_json(!self.compact)?;
        Output::new().result(&json);
        Ok(())
    }
}
