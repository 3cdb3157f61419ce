//! `portal sidebar` command implementation.

use std::path::PathBuf;

use clap::Args;
use portal_config::{SidebarEntry, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page route, e.g. `/guide/migration/introduction`.
    path: String,

    /// Path to configuration file (default: auto-discover portal.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or no binding
    /// covers the route.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref(), None)?;

        let key = config
            .theme
            .sidebar
            .section_for(&self.path)
            .ok_or_else(|| {
                CliError::Validation(format!("no sidebar binding covers {}", self.path))
            })?;
        let section = config.sidebars.get(key).ok_or_else(|| {
            CliError::Validation(format!("sidebar section '{key}' is not defined"))
        })?;

        output.heading(&format!("{} -> {key}", self.path));
        for line in outline(section) {
            output.result(&line);
        }
        Ok(())
    }
}

/// Indented text outline of a sidebar section.
fn outline(section: &[SidebarEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in section {
        push_entry(&mut lines, entry, 0);
    }
    lines
}

fn push_entry(lines: &mut Vec<String>, entry: &SidebarEntry, depth: usize) {
    let indent = "  ".repeat(depth);
    match entry {
        SidebarEntry::Path(path) => lines.push(format!("{indent}{path}")),
        SidebarEntry::Labeled(path, label) => lines.push(format!("{indent}{path} ({label})")),
        SidebarEntry::Group(group) => {
            let mut line = format!("{indent}[{}]", group.title);
            if let Some(path) = &group.path {
                line.push(' ');
                line.push_str(path);
            }
            lines.push(line);
            for child in &group.children {
                push_entry(lines, child, depth + 1);
            }
        }
    }
}
