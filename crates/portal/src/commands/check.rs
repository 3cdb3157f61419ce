//! `portal check` command implementation.

use std::path::PathBuf;

use clap::Args;
use portal_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover portal.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or if `--strict`
    /// is set and warnings were reported.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = SiteConfig::load(self.config.as_deref(), None)?;
        config.validate()?;

        let source = config
            .config_path
            .as_ref()
            .map_or_else(|| "built-in configuration".to_owned(), |p| p.display().to_string());
        output.heading(&format!("Checking {source}"));

        let warnings = collect_warnings(&config);
        for warning in &warnings {
            output.warn(warning);
        }

        if self.strict && !warnings.is_empty() {
            return Err(CliError::Validation(format!(
                "{} warning(s) reported",
                warnings.len()
            )));
        }

        output.ok(&format!(
            "OK: {} sidebar section(s), {} binding(s), {} plugin(s)",
            config.sidebars.len(),
            config.theme.sidebar.routes.len(),
            config.plugins.len()
        ));
        Ok(())
    }
}

/// Authoring warnings for a valid configuration.
fn collect_warnings(config: &SiteConfig) -> Vec<String> {
    let uncovered = config
        .uncovered_nav_links()
        .into_iter()
        .map(|link| format!("nav link {link} has no sidebar binding"));
    let duplicates = config
        .duplicate_sidebar_routes()
        .into_iter()
        .map(|(section, route)| format!("route {route} listed more than once in section '{section}'"));
    let unused = config
        .sidebars
        .keys()
        .filter(|key| !config.theme.sidebar.routes.values().any(|bound| bound == *key))
        .map(|key| format!("sidebar section '{key}' is not bound to any route prefix"));

    uncovered.chain(duplicates).chain(unused).collect()
}
