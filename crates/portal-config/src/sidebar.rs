//! Sidebar schema.
//!
//! A sidebar section is an ordered list of [`SidebarEntry`] values. Entries
//! come in three shapes that may be mixed freely inside one list:
//!
//! - a bare route: `"/guide/installation"`
//! - a route with a label: `["/guide/ssr/introduction", "Introducción"]`
//! - a group: `{ title, collapsable, path, children }`
//!
//! Shapes are kept exactly as authored. The site generator interprets each
//! one on its own, so nothing here normalizes them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered navigation tree shown for one site section.
pub type SidebarSection = Vec<SidebarEntry>;

/// One entry of a sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Route path; the generator takes the label from the page title.
    Path(String),
    /// Route path with an explicit label.
    Labeled(String, String),
    /// Titled group, optionally clickable through `path`.
    Group(SidebarGroup),
}

/// Titled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsable: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarEntry>,
}

impl SidebarEntry {
    /// Leaf entry for a route.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Leaf entry for a route with a display label.
    pub fn labeled(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Labeled(path.into(), label.into())
    }

    /// Group entry without a collapsable flag or header link.
    pub fn group<I>(title: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = SidebarEntry>,
    {
        Self::Group(SidebarGroup {
            title: title.into(),
            path: None,
            collapsable: None,
            children: children.into_iter().collect(),
        })
    }

    /// Group entry that never collapses.
    pub fn expanded_group<I>(title: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = SidebarEntry>,
    {
        let mut entry = Self::group(title, children);
        if let Self::Group(group) = &mut entry {
            group.collapsable = Some(false);
        }
        entry
    }

    /// Clickable group header linking to `path`, with no children.
    pub fn header(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Group(SidebarGroup {
            title: title.into(),
            path: Some(path.into()),
            collapsable: None,
            children: Vec::new(),
        })
    }

    /// Attach a header link to a group. Leaves are returned unchanged.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        if let Self::Group(group) = &mut self {
            group.path = Some(path.into());
        }
        self
    }

    /// All routes referenced by this entry, depth first.
    pub fn routes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_routes(&mut out);
        out
    }

    fn collect_routes<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Path(path) | Self::Labeled(path, _) => out.push(path),
            Self::Group(group) => {
                if let Some(path) = &group.path {
                    out.push(path);
                }
                for child in &group.children {
                    child.collect_routes(out);
                }
            }
        }
    }
}

/// Routes that appear more than once in a section, in first-seen order.
///
/// Uniqueness is an authoring convention the generator never checks, so
/// callers report these as warnings.
pub fn duplicate_routes(section: &[SidebarEntry]) -> Vec<&str> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for route in section.iter().flat_map(SidebarEntry::routes) {
        *counts.entry(route).or_default() += 1;
    }
    counts
        .into_iter()
        .filter_map(|(route, n)| (n > 1).then_some(route))
        .collect()
}

/// Binding of route prefixes to sidebar sections.
///
/// Prefixes are kept in declaration order; more specific prefixes such as
/// `/guide/migration/` must come before `/guide/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Global collapsable default applied by the generator.
    pub collapsable: Option<bool>,
    /// Route prefix to section key.
    pub routes: IndexMap<String, String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        crate::builtin::sidebar_bindings()
    }
}

impl SidebarConfig {
    /// Section key used for a page path.
    ///
    /// The generator owns prefix matching. This mirrors the assumed rule:
    /// the first binding, in declaration order, whose prefix starts the path
    /// once a trailing slash is ensured.
    pub fn section_for(&self, path: &str) -> Option<&str> {
        let normalized = if path.ends_with('/') {
            path.to_owned()
        } else {
            format!("{path}/")
        };
        self.routes
            .iter()
            .find(|(prefix, _)| normalized.starts_with(prefix.as_str()))
            .map(|(_, key)| key.as_str())
    }

    /// Whether any binding covers the given page path.
    pub fn covers(&self, path: &str) -> bool {
        self.section_for(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bindings() -> SidebarConfig {
        SidebarConfig {
            collapsable: Some(false),
            routes: [
                ("/guide/migration/", "migration"),
                ("/guide/", "guide"),
                ("/api/", "api"),
            ]
            .into_iter()
            .map(|(p, k)| (p.to_owned(), k.to_owned()))
            .collect(),
        }
    }

    #[test]
    fn test_mixed_shapes_serialize_as_authored() {
        let section = vec![
            SidebarEntry::labeled("/guide/ssr/introduction", "Introducción"),
            SidebarEntry::path("/guide/ssr/getting-started"),
            SidebarEntry::expanded_group("Detalles", [SidebarEntry::path("/a")]),
            SidebarEntry::header("Especificación", "/api/sfc-spec"),
        ];
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(
            json,
            r#"[["/guide/ssr/introduction","Introducción"],"/guide/ssr/getting-started",{"title":"Detalles","collapsable":false,"children":["/a"]},{"title":"Especificación","path":"/api/sfc-spec"}]"#
        );
    }

    #[test]
    fn test_mixed_shapes_deserialize() {
        let json = r#"["/a", ["/b", "B"], {"title": "G", "children": ["/c", {"title": "H", "path": "/h"}]}]"#;
        let section: SidebarSection = serde_json::from_str(json).unwrap();
        assert_eq!(section[0], SidebarEntry::path("/a"));
        assert_eq!(section[1], SidebarEntry::labeled("/b", "B"));
        assert_eq!(
            section[2],
            SidebarEntry::group(
                "G",
                [SidebarEntry::path("/c"), SidebarEntry::header("H", "/h")]
            )
        );
    }

    #[test]
    fn test_routes_nested_groups() {
        let entry = SidebarEntry::expanded_group(
            "Opciones",
            [
                SidebarEntry::path("/api/options-data"),
                SidebarEntry::group("Inner", [SidebarEntry::path("/api/deep")]),
            ],
        )
        .with_path("/api/options-api");
        assert_eq!(
            entry.routes(),
            vec!["/api/options-api", "/api/options-data", "/api/deep"]
        );
    }

    #[test]
    fn test_duplicate_routes() {
        let section = vec![
            SidebarEntry::path("/a"),
            SidebarEntry::group("G", [SidebarEntry::path("/b"), SidebarEntry::path("/a")]),
        ];
        assert_eq!(duplicate_routes(&section), vec!["/a"]);
    }

    #[test]
    fn test_section_for_prefers_declaration_order() {
        let config = bindings();
        assert_eq!(
            config.section_for("/guide/migration/introduction"),
            Some("migration")
        );
        assert_eq!(config.section_for("/guide/introduction"), Some("guide"));
        assert_eq!(config.section_for("/api/"), Some("api"));
    }

    #[test]
    fn test_section_for_adds_trailing_slash() {
        assert_eq!(bindings().section_for("/api"), Some("api"));
    }

    #[test]
    fn test_section_for_unbound() {
        let config = bindings();
        assert_eq!(config.section_for("/style-guide/"), None);
        assert!(!config.covers("/community/team/"));
    }
}
