//! Header navigation menu.

use serde::{Deserialize, Serialize};

/// Top-level or dropdown entry in the site header.
///
/// An item with `items` renders as a dropdown; without them it is a plain
/// link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NavItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
    /// Marks a link to another locale of the docs.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_translation: bool,
}

impl NavItem {
    /// Plain link.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Dropdown without a link of its own.
    pub fn dropdown<I>(text: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = NavItem>,
    {
        Self {
            text: text.into(),
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Link to a translated copy of the docs.
    pub fn translation(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            is_translation: true,
            ..Self::link(text, link)
        }
    }

    #[must_use]
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn is_dropdown(&self) -> bool {
        !self.items.is_empty()
    }

    /// Site-local links of this item and its descendants, depth first.
    ///
    /// External URLs and bare `#` anchors are skipped.
    pub fn internal_links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_internal_links(&mut out);
        out
    }

    fn collect_internal_links<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(link) = self.link.as_deref()
            && link.starts_with('/')
        {
            out.push(link);
        }
        for item in &self.items {
            item.collect_internal_links(out);
        }
    }
}
