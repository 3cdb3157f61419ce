//! Build plugin registrations.
//!
//! Each registration is serialized as `[pluginName, options]`. Options may
//! carry code (the last-updated transformer, the container opening
//! template); those are plain `fn` pointers to named functions in this
//! crate, so they stay unit-testable and are left out of serialized output.

use indexmap::IndexMap;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

use crate::last_updated::format_last_updated;

/// Turns a millisecond timestamp into display text.
pub type Transformer = fn(i64) -> String;

/// Builds the opening HTML of a container block from its type and title.
pub type BlockTemplate = fn(&str, &str) -> String;

/// A named build-time extension with its options.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "name")]
pub enum Plugin {
    #[serde(rename = "@vuepress/last-updated")]
    LastUpdated(LastUpdatedOptions),
    #[serde(rename = "@vuepress/pwa")]
    Pwa(PwaOptions),
    #[serde(rename = "vuepress-plugin-container")]
    Container(ContainerOptions),
}

impl Plugin {
    /// Package name the generator's plugin loader resolves.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LastUpdated(_) => "@vuepress/last-updated",
            Self::Pwa(_) => "@vuepress/pwa",
            Self::Container(_) => "vuepress-plugin-container",
        }
    }
}

impl Serialize for Plugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.name())?;
        match self {
            Self::LastUpdated(options) => tuple.serialize_element(options)?,
            Self::Pwa(options) => tuple.serialize_element(options)?,
            Self::Container(options) => tuple.serialize_element(options)?,
        }
        tuple.end()
    }
}

/// Options of the last-updated plugin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LastUpdatedOptions {
    #[serde(skip, default = "default_transformer")]
    pub transformer: Transformer,
}

impl Default for LastUpdatedOptions {
    fn default() -> Self {
        Self {
            transformer: default_transformer(),
        }
    }
}

fn default_transformer() -> Transformer {
    format_last_updated
}

/// Options of the PWA plugin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PwaOptions {
    #[serde(default)]
    pub service_worker: bool,
    /// Route to the popup shown when new content is available.
    #[serde(default)]
    pub update_popup: IndexMap<String, UpdatePopup>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UpdatePopup {
    pub message: String,
    pub button_text: String,
}

/// Options of the container-block plugin.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ContainerOptions {
    /// Block type matched after the `:::` marker.
    #[serde(rename = "type", default = "default_container_type")]
    pub kind: String,
    /// Title used when the marker line carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_title: Option<String>,
    #[serde(skip, default = "default_before")]
    pub before: BlockTemplate,
    #[serde(default = "default_after")]
    pub after: String,
}

impl ContainerOptions {
    /// Title to render for the text following the type marker.
    pub fn title_for<'a>(&'a self, info: &'a str) -> std::borrow::Cow<'a, str> {
        let info = info.trim();
        if !info.is_empty() {
            return info.into();
        }
        match &self.default_title {
            Some(title) => title.as_str().into(),
            None => self.kind.to_uppercase().into(),
        }
    }

    /// Opening HTML for a block whose marker line carries `info`.
    pub fn render_before(&self, info: &str) -> String {
        (self.before)(&self.kind, &self.title_for(info))
    }
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            kind: default_container_type(),
            default_title: None,
            before: default_before(),
            after: default_after(),
        }
    }
}

fn default_container_type() -> String {
    "info".to_owned()
}

fn default_before() -> BlockTemplate {
    custom_block_before
}

fn default_after() -> String {
    INFO_BLOCK_AFTER.to_owned()
}

/// Closing HTML of an `info` container block.
pub const INFO_BLOCK_AFTER: &str = "</div>";

/// Opening HTML of a container block of type `kind`.
///
/// The title is inserted as-is; it is not escaped.
pub fn custom_block_before(kind: &str, title: &str) -> String {
    format!(r#"<div class="custom-block {kind}"><p class="custom-block-title">{title}</p>"#)
}

/// Opening HTML of an `info` container block.
pub fn info_block_before(title: &str) -> String {
    custom_block_before("info", title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_info_block_before() {
        assert_eq!(
            info_block_before("Nota"),
            r#"<div class="custom-block info"><p class="custom-block-title">Nota</p>"#
        );
    }

    #[test]
    fn test_info_block_does_not_escape_content() {
        let html = format!(
            "{}{}{}",
            info_block_before("Nota"),
            "<p>x</div></p>",
            INFO_BLOCK_AFTER
        );
        assert_eq!(
            html,
            r#"<div class="custom-block info"><p class="custom-block-title">Nota</p><p>x</div></p></div>"#
        );
    }

    #[test]
    fn test_title_falls_back_to_upper_kind() {
        let options = ContainerOptions::default();
        assert_eq!(options.title_for("  "), "INFO");
        assert_eq!(options.title_for(" Nota "), "Nota");
    }

    #[test]
    fn test_title_falls_back_to_configured_default() {
        let options = ContainerOptions {
            default_title: Some("Información".to_owned()),
            ..ContainerOptions::default()
        };
        assert_eq!(
            options.render_before(""),
            r#"<div class="custom-block info"><p class="custom-block-title">Información</p>"#
        );
    }

    #[test]
    fn test_block_class_follows_type() {
        let options = ContainerOptions {
            kind: "tip".to_owned(),
            default_title: Some("Consejo".to_owned()),
            ..ContainerOptions::default()
        };
        assert_eq!(
            options.render_before(""),
            r#"<div class="custom-block tip"><p class="custom-block-title">Consejo</p>"#
        );
        assert_eq!(
            ContainerOptions::default().render_before(""),
            info_block_before("INFO")
        );
    }

    #[test]
    fn test_transformer_is_named_formatter() {
        let options = LastUpdatedOptions::default();
        assert_eq!((options.transformer)(0), "1970-01-01, 00:00:00 UTC");
    }

    #[test]
    fn test_serialize_as_name_options_pair() {
        let plugin = Plugin::Pwa(PwaOptions {
            service_worker: true,
            update_popup: IndexMap::from([(
                "/".to_owned(),
                UpdatePopup {
                    message: "Nuevo contenido es disponible.".to_owned(),
                    button_text: "Recargar".to_owned(),
                },
            )]),
        });
        assert_eq!(
            serde_json::to_string(&plugin).unwrap(),
            r#"["@vuepress/pwa",{"serviceWorker":true,"updatePopup":{"/":{"message":"Nuevo contenido es disponible.","buttonText":"Recargar"}}}]"#
        );
    }

    #[test]
    fn test_function_options_skipped() {
        let container = Plugin::Container(ContainerOptions::default());
        assert_eq!(
            serde_json::to_string(&container).unwrap(),
            r#"["vuepress-plugin-container",{"type":"info","after":"</div>"}]"#
        );
        let last_updated = Plugin::LastUpdated(LastUpdatedOptions::default());
        assert_eq!(
            serde_json::to_string(&last_updated).unwrap(),
            r#"["@vuepress/last-updated",{}]"#
        );
    }

    #[test]
    fn test_deserialize_tagged_by_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            plugins: Vec<Plugin>,
        }
        let wrapper: Wrapper = toml::from_str(
            r#"
[[plugins]]
name = "@vuepress/last-updated"

[[plugins]]
name = "vuepress-plugin-container"
type = "tip"
default_title = "Consejo"
"#,
        )
        .unwrap();
        assert_eq!(wrapper.plugins.len(), 2);
        assert_eq!(wrapper.plugins[0].name(), "@vuepress/last-updated");
        let Plugin::Container(options) = &wrapper.plugins[1] else {
            panic!("expected container plugin");
        };
        assert_eq!(options.kind, "tip");
        assert_eq!(options.after, "</div>");
        assert_eq!(options.title_for(""), "Consejo");
    }
}
