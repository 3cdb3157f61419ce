//! `portal last-updated` command implementation.

use std::path::PathBuf;

use clap::Args;
use portal_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the last-updated command.
#[derive(Args)]
pub(crate) struct LastUpdatedArgs {
    /// Milliseconds since the Unix epoch.
    #[arg(allow_negative_numbers = true)]
    timestamp: i64,

    /// Path to configuration file (default: auto-discover portal.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LastUpdatedArgs {
    /// Execute the last-updated command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or does not
    /// register the last-updated plugin.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = SiteConfig::load(self.config.as_deref(), None)?;
        let transformer = config.last_updated_transformer().ok_or_else(|| {
            CliError::Validation("@vuepress/last-updated plugin is not registered".to_owned())
        })?;
        Output::new().result(&transformer(self.timestamp));
        Ok(())
    }
}
