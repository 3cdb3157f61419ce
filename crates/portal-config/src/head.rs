//! Tags injected into the generated `<head>`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HTML head element as `[tagName, { attribute: value }]`.
///
/// Tags are emitted verbatim and in order; later tags may override earlier
/// ones when the browser applies them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag(pub String, pub IndexMap<String, String>);

impl HeadTag {
    pub fn new<I, K, V>(tag: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            tag.into(),
            attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn link<I, K, V>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new("link", attrs)
    }

    /// `<meta name=".." content="..">`
    pub fn meta(name: &str, content: &str) -> Self {
        Self::new("meta", [("name", name), ("content", content)])
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.1.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_as_pair() {
        let tag = HeadTag::link([("rel", "icon"), ("href", "/logo.png")]);
        assert_eq!(
            serde_json::to_string(&tag).unwrap(),
            r#"["link",{"rel":"icon","href":"/logo.png"}]"#
        );
    }

    #[test]
    fn test_attribute_order_preserved() {
        let tag = HeadTag::new("script", [("src", "/a.js"), ("defer", "defer")]);
        let keys: Vec<&str> = tag.1.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src", "defer"]);
        assert_eq!(tag.attr("defer"), Some("defer"));
        assert_eq!(tag.tag(), "script");
    }

    #[test]
    fn test_deserialize_from_toml_array() {
        #[derive(Deserialize)]
        struct Wrapper {
            head: Vec<HeadTag>,
        }
        let wrapper: Wrapper = toml::from_str(
            r##"head = [["meta", { name = "theme-color", content = "#3eaf7c" }]]"##,
        )
        .unwrap();
        assert_eq!(wrapper.head[0], HeadTag::meta("theme-color", "#3eaf7c"));
    }
}
