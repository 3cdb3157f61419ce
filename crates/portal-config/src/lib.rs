//! Site configuration for the documentation portal.
//!
//! The configuration is an immutable [`SiteConfig`] value: sidebar sections,
//! head tags, theme options, plugin registrations and markdown options. It is
//! built once at startup and passed explicitly to whatever consumes it.
//!
//! The built-in definition ([`SiteConfig::builtin`]) is used unless a
//! `portal.toml` is found in the current directory or a parent, or given
//! explicitly. Tables missing from the file keep their built-in values.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Integration keys support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `theme.algolia.index_name`
//! - `theme.algolia.app_id`
//! - `theme.algolia.api_key`
//! - `theme.carbon_ads.carbon`
//! - `theme.carbon_ads.custom`
//! - `theme.carbon_ads.placement`

mod builtin;
mod expand;
mod generator;
mod head;
mod last_updated;
mod markdown;
mod nav;
mod plugins;
mod sidebar;
mod theme;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

pub use generator::{GeneratorConfig, ResolvedSidebar, ThemeView};
pub use head::HeadTag;
pub use last_updated::format_last_updated;
pub use markdown::MarkdownConfig;
pub use nav::NavItem;
pub use plugins::{
    BlockTemplate, ContainerOptions, INFO_BLOCK_AFTER, LastUpdatedOptions, Plugin, PwaOptions,
    Transformer, UpdatePopup, custom_block_before, info_block_before,
};
pub use sidebar::{SidebarConfig, SidebarEntry, SidebarGroup, SidebarSection, duplicate_routes};
pub use theme::{AlgoliaConfig, CarbonAdsConfig, ThemeConfig};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override line-number annotation of code blocks.
    pub line_numbers: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "portal.toml";

/// Deepest heading level the theme can list in a sidebar.
const MAX_SIDEBAR_DEPTH: u8 = 6;

/// Site configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Tags injected into every page head, in order.
    pub head: Vec<HeadTag>,
    /// Sidebar sections keyed by section identifier.
    pub sidebars: IndexMap<String, SidebarSection>,
    pub theme: ThemeConfig,
    /// Build plugins in registration order.
    pub plugins: Vec<Plugin>,
    pub markdown: MarkdownConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        builtin::site()
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.algolia.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl SiteConfig {
    /// The built-in portal definition.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::site()
    }

    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `portal.toml` in current directory and parents,
    /// falling back to the built-in definition.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using built-in configuration");
            Self::builtin()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(line_numbers) = settings.line_numbers {
            self.markdown.line_numbers = line_numbers;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_from(&start)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            sections = config.sidebars.len(),
            plugins = config.plugins.len(),
            "Loaded site configuration"
        );

        Ok(config)
    }

    /// Parse, expand and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns parse, expansion or validation errors.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks the structural completeness of the sidebar bindings and the
    /// shape of the integration blocks. Route existence is never checked.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        self.validate_theme()?;
        self.resolve()?;
        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        if self.theme.sidebar_depth > MAX_SIDEBAR_DEPTH {
            return Err(ConfigError::Validation(format!(
                "theme.sidebar_depth cannot exceed {MAX_SIDEBAR_DEPTH}"
            )));
        }

        if let Some(algolia) = &self.theme.algolia {
            require_non_empty(&algolia.index_name, "theme.algolia.index_name")?;
            require_non_empty(&algolia.app_id, "theme.algolia.app_id")?;
            require_non_empty(&algolia.api_key, "theme.algolia.api_key")?;
        }

        for (prefix, _) in &self.theme.sidebar.routes {
            if !prefix.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "theme.sidebar.routes prefix \"{prefix}\" must start with /"
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in integration keys.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(algolia) = &mut self.theme.algolia {
            expand::expand_in_place(&mut algolia.index_name, "theme.algolia.index_name")?;
            expand::expand_in_place(&mut algolia.app_id, "theme.algolia.app_id")?;
            expand::expand_in_place(&mut algolia.api_key, "theme.algolia.api_key")?;
        }

        if let Some(ads) = &mut self.theme.carbon_ads {
            expand::expand_in_place(&mut ads.carbon, "theme.carbon_ads.carbon")?;
            expand::expand_in_place(&mut ads.custom, "theme.carbon_ads.custom")?;
            expand::expand_in_place(&mut ads.placement, "theme.carbon_ads.placement")?;
        }

        Ok(())
    }

    /// Container-block plugins in registration order.
    pub fn containers(&self) -> impl Iterator<Item = &ContainerOptions> {
        self.plugins.iter().filter_map(|plugin| match plugin {
            Plugin::Container(options) => Some(options),
            _ => None,
        })
    }

    /// Last-updated transformer, if the plugin is registered.
    pub fn last_updated_transformer(&self) -> Option<Transformer> {
        self.plugins.iter().find_map(|plugin| match plugin {
            Plugin::LastUpdated(options) => Some(options.transformer),
            _ => None,
        })
    }

    /// Site-local nav links that no sidebar binding covers.
    ///
    /// Such pages render without a sidebar. This is reported, not rejected.
    pub fn uncovered_nav_links(&self) -> Vec<&str> {
        self.theme
            .nav
            .iter()
            .flat_map(NavItem::internal_links)
            .filter(|link| {
                let path = link.split('#').next().unwrap_or_default();
                !self.theme.sidebar.covers(path)
            })
            .collect()
    }

    /// Routes listed more than once within a section, keyed by section.
    pub fn duplicate_sidebar_routes(&self) -> Vec<(&str, &str)> {
        self.sidebars
            .iter()
            .flat_map(|(key, section)| {
                duplicate_routes(section)
                    .into_iter()
                    .map(move |route| (key.as_str(), route))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_config() {
        let config = SiteConfig::builtin();
        assert_eq!(config.title, "Vue.js");
        assert_eq!(
            config.description,
            "Vue.js - El Framework JavaScript Progresivo"
        );
        assert_eq!(config.sidebars.len(), 7);
        assert_eq!(config.plugins.len(), 3);
        assert!(config.markdown.line_numbers);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_builtin_validates() {
        assert!(SiteConfig::builtin().validate().is_ok());
    }

    #[test]
    fn test_parse_empty_keeps_builtin() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config.title, "Vue.js");
        assert_eq!(config.theme.repo, "vuejs/docs");
        assert_eq!(config.head.len(), 13);
    }

    #[test]
    fn test_overlay_keeps_unspecified_tables() {
        let toml = r#"
title = "Vue.js ES"

[markdown]
line_numbers = false

[theme]
repo = "vuejs-translations/docs-es"
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        assert_eq!(config.title, "Vue.js ES");
        assert!(!config.markdown.line_numbers);
        assert_eq!(config.theme.repo, "vuejs-translations/docs-es");
        assert_eq!(config.theme.logo, "/logo.png");
        assert_eq!(config.theme.sidebar.routes.len(), 8);
        assert_eq!(config.sidebars.len(), 7);
    }

    #[test]
    fn test_partial_sidebar_table_keeps_builtin_routes() {
        let toml = r#"
[theme.sidebar]
collapsable = true
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        assert_eq!(config.theme.sidebar.collapsable, Some(true));
        assert_eq!(config.theme.sidebar.routes.len(), 8);
        assert_eq!(
            config.theme.sidebar.section_for("/guide/migration/introduction"),
            Some("migration")
        );
        let json = config.to_generator_json(false).unwrap();
        assert!(json.contains(r#""sidebar":{"collapsable":true,"/guide/migration/":["#));
    }

    #[test]
    fn test_parse_custom_sidebars() {
        let toml = r#"
[sidebars]
guide = ["/guide/", ["/guide/intro", "Intro"], { title = "Más", collapsable = false, children = ["/guide/more"] }]

[theme.sidebar]
collapsable = false

[theme.sidebar.routes]
"/guide/" = "guide"
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        assert_eq!(config.sidebars.len(), 1);
        let guide = &config.sidebars["guide"];
        assert_eq!(guide[0], SidebarEntry::path("/guide/"));
        assert_eq!(guide[1], SidebarEntry::labeled("/guide/intro", "Intro"));
        assert_eq!(
            guide[2],
            SidebarEntry::expanded_group("Más", [SidebarEntry::path("/guide/more")])
        );
        assert_eq!(config.theme.sidebar.section_for("/guide/intro"), Some("guide"));
    }

    #[test]
    fn test_dangling_section_key_rejected() {
        let toml = r#"
[sidebars]
guide = ["/guide/"]

[theme.sidebar.routes]
"/api/" = "api"
"#;
        let err = SiteConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("'api'"));
    }

    #[test]
    fn test_validate_title_empty() {
        let mut config = SiteConfig::builtin();
        config.title = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("title cannot be empty"));
    }

    #[test]
    fn test_validate_sidebar_depth() {
        let mut config = SiteConfig::builtin();
        config.theme.sidebar_depth = 7;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sidebar_depth"));
    }

    #[test]
    fn test_validate_prefix_slash() {
        let mut config = SiteConfig::builtin();
        config
            .theme
            .sidebar
            .routes
            .insert("guide/".to_owned(), "guide".to_owned());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must start with /"));
    }

    #[test]
    fn test_validate_algolia_empty_key() {
        let mut config = SiteConfig::builtin();
        if let Some(algolia) = &mut config.theme.algolia {
            algolia.api_key = String::new();
        }
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme.algolia.api_key"));
    }

    #[test]
    fn test_expand_env_vars_algolia() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PORTAL_TEST_APP_ID", "APP42");
        }
        let toml = r#"
[theme.algolia]
index_name = "vuejs-v3"
app_id = "${PORTAL_TEST_APP_ID}"
api_key = "${PORTAL_TEST_UNSET_KEY:-public}"
"#;
        let config = SiteConfig::from_toml(toml).unwrap();
        let algolia = config.theme.algolia.unwrap();
        assert_eq!(algolia.app_id, "APP42");
        assert_eq!(algolia.api_key, "public");
        unsafe {
            std::env::remove_var("PORTAL_TEST_APP_ID");
        }
    }

    #[test]
    fn test_expand_env_vars_missing() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PORTAL_TEST_MISSING_CARBON");
        }
        let toml = r#"
[theme.carbon_ads]
carbon = "${PORTAL_TEST_MISSING_CARBON}"
custom = "x"
placement = "y"
"#;
        let err = SiteConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("theme.carbon_ads.carbon"));
    }

    #[test]
    fn test_apply_cli_settings_line_numbers() {
        let mut config = SiteConfig::builtin();
        config.apply_cli_settings(&CliSettings {
            line_numbers: Some(false),
        });
        assert!(!config.markdown.line_numbers);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = SiteConfig::builtin();
        config.apply_cli_settings(&CliSettings::default());
        assert!(config.markdown.line_numbers);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = SiteConfig::load(Some(Path::new("/nonexistent/portal.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "description = \"Docs\"\n").unwrap();

        let config = SiteConfig::load(
            Some(&path),
            Some(&CliSettings {
                line_numbers: Some(false),
            }),
        )
        .unwrap();

        assert_eq!(config.description, "Docs");
        assert_eq!(config.config_path, Some(path));
        assert!(!config.markdown.line_numbers);
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = SiteConfig::discover_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_containers_and_transformer() {
        let config = SiteConfig::builtin();
        let kinds: Vec<&str> = config.containers().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["info"]);
        let transformer = config.last_updated_transformer().unwrap();
        assert_eq!(transformer(0), "1970-01-01, 00:00:00 UTC");
    }

    #[test]
    fn test_uncovered_nav_links() {
        let config = SiteConfig::builtin();
        assert_eq!(
            config.uncovered_nav_links(),
            vec![
                "/style-guide/",
                "/support-vuejs/",
                "/support-vuejs/#one-time-donations",
                "/support-vuejs/#recurring-pledges",
            ]
        );
    }

    #[test]
    fn test_builtin_has_no_duplicate_routes() {
        assert!(SiteConfig::builtin().duplicate_sidebar_routes().is_empty());
    }
}
