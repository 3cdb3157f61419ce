//! Generator-facing view of the site configuration.
//!
//! [`SiteConfig`] keeps sidebar bindings as section keys so that a
//! `portal.toml` can share one section between several prefixes. The site
//! generator expects the sections inline, so [`SiteConfig::resolve`] builds
//! a borrowed view with every key replaced by its entries.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::head::HeadTag;
use crate::markdown::MarkdownConfig;
use crate::plugins::Plugin;
use crate::sidebar::SidebarEntry;
use crate::theme::ThemeConfig;
use crate::{ConfigError, SiteConfig};

/// Configuration value handed to the site generator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub head: &'a [HeadTag],
    pub theme_config: ThemeView<'a>,
    pub plugins: &'a [Plugin],
    pub markdown: &'a MarkdownConfig,
}

/// Theme options with resolved sidebar sections.
#[derive(Debug, Serialize)]
pub struct ThemeView<'a> {
    #[serde(flatten)]
    pub theme: &'a ThemeConfig,
    pub sidebar: ResolvedSidebar<'a>,
}

/// Sidebar mapping as the generator reads it: an optional global
/// `collapsable` default followed by prefix → section entries.
#[derive(Debug)]
pub struct ResolvedSidebar<'a> {
    pub collapsable: Option<bool>,
    pub routes: IndexMap<&'a str, &'a [SidebarEntry]>,
}

impl Serialize for ResolvedSidebar<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.routes.len() + usize::from(self.collapsable.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(collapsable) = self.collapsable {
            map.serialize_entry("collapsable", &collapsable)?;
        }
        for (prefix, entries) in &self.routes {
            map.serialize_entry(prefix, entries)?;
        }
        map.end()
    }
}

impl SiteConfig {
    /// Build the generator view, resolving every sidebar binding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first prefix bound to a
    /// section that is not declared.
    pub fn resolve(&self) -> Result<GeneratorConfig<'_>, ConfigError> {
        let bindings = &self.theme.sidebar;
        let mut routes = IndexMap::with_capacity(bindings.routes.len());
        for (prefix, key) in &bindings.routes {
            let section = self.sidebars.get(key).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "theme.sidebar.routes.\"{prefix}\" references undefined section '{key}'"
                ))
            })?;
            routes.insert(prefix.as_str(), section.as_slice());
        }

        tracing::debug!(sections = routes.len(), "Resolved sidebar bindings");

        Ok(GeneratorConfig {
            title: &self.title,
            description: &self.description,
            head: &self.head,
            theme_config: ThemeView {
                theme: &self.theme,
                sidebar: ResolvedSidebar {
                    collapsable: bindings.collapsable,
                    routes,
                },
            },
            plugins: &self.plugins,
            markdown: &self.markdown,
        })
    }

    /// Serialize the generator view as JSON.
    ///
    /// # Errors
    ///
    /// Fails if a sidebar binding is dangling.
    pub fn to_generator_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let view = self.resolve()?;
        let json = if pretty {
            serde_json::to_string_pretty(&view)?
        } else {
            serde_json::to_string(&view)?
        };
        Ok(json)
    }
}
