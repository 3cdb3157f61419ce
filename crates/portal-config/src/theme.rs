//! Theme options handed to the generator's theme layer.

use serde::{Deserialize, Serialize};

use crate::nav::NavItem;
use crate::sidebar::SidebarConfig;

/// Theme configuration.
///
/// Serialized in the generator's camelCase shape. The sidebar bindings are
/// skipped here: they reference sections by key and are written out by
/// [`GeneratorConfig`](crate::GeneratorConfig) once resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ThemeConfig {
    pub logo: String,
    pub nav: Vec<NavItem>,
    /// Repository identifier, e.g. `vuejs/docs`.
    pub repo: String,
    pub edit_links: bool,
    pub edit_link_text: String,
    /// Label shown before the last-updated timestamp.
    pub last_updated: String,
    pub docs_dir: String,
    pub sidebar_depth: u8,
    #[serde(skip_serializing)]
    pub sidebar: SidebarConfig,
    pub smooth_scroll: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_ads: Option<CarbonAdsConfig>,
    pub top_banner: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        crate::builtin::theme()
    }
}

/// Search index options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AlgoliaConfig {
    pub index_name: String,
    pub app_id: String,
    pub api_key: String,
}

/// Ad placement options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonAdsConfig {
    pub carbon: String,
    pub custom: String,
    pub placement: String,
}
