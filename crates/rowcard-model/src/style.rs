//! Style classes, style layers and the resolved style descriptor.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of a style class in the `styles.types` registry.
///
/// The three classes every shipped profile defines get their own variants;
/// any other name an author chooses is kept verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleClass {
    Title,
    #[default]
    Body,
    Meta,
    Custom(String),
}

impl StyleClass {
    pub fn as_str(&self) -> &str {
        match self {
            StyleClass::Title => "title",
            StyleClass::Body => "body",
            StyleClass::Meta => "meta",
            StyleClass::Custom(name) => name,
        }
    }
}

impl From<String> for StyleClass {
    fn from(name: String) -> Self {
        match name.as_str() {
            "title" => StyleClass::Title,
            "body" => StyleClass::Body,
            "meta" => StyleClass::Meta,
            _ => StyleClass::Custom(name),
        }
    }
}

impl From<&str> for StyleClass {
    fn from(name: &str) -> Self {
        StyleClass::from(name.to_string())
    }
}

impl From<StyleClass> for String {
    fn from(class: StyleClass) -> Self {
        match class {
            StyleClass::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_FONT_SIZE: f32 = 10.0;
pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_FONT_WEIGHT: &str = "normal";

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_font_weight() -> String {
    DEFAULT_FONT_WEIGHT.to_string()
}

/// Base style of a style class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_font_weight", deserialize_with = "text::required")]
    pub font_weight: String,
    #[serde(default)]
    pub margin_bottom: f32,
    /// Presentation keys this crate does not interpret (e.g. `textTransform`).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for TypeStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            color: default_color(),
            font_weight: default_font_weight(),
            margin_bottom: 0.0,
            extra: IndexMap::new(),
        }
    }
}

/// Partial style carried by a rule; only the keys present override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text::optional"
    )]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.color.is_none()
            && self.font_weight.is_none()
            && self.margin_bottom.is_none()
            && self.text_decoration.is_none()
            && self.extra.is_empty()
    }
}

/// Fully resolved presentation attributes of one field instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub font_size: f32,
    pub color: String,
    pub font_weight: String,
    pub margin_bottom: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl StyleDescriptor {
    /// Shallow-merge `patch` over this descriptor.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(color) = &patch.color {
            self.color.clone_from(color);
        }
        if let Some(weight) = &patch.font_weight {
            self.font_weight.clone_from(weight);
        }
        if let Some(margin) = patch.margin_bottom {
            self.margin_bottom = margin;
        }
        if let Some(decoration) = &patch.text_decoration {
            self.text_decoration = Some(decoration.clone());
        }
        for (key, value) in &patch.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

impl From<&TypeStyle> for StyleDescriptor {
    fn from(base: &TypeStyle) -> Self {
        Self {
            font_size: base.font_size,
            color: base.color.clone(),
            font_weight: base.font_weight.clone(),
            margin_bottom: base.margin_bottom,
            text_decoration: None,
            extra: base.extra.clone(),
        }
    }
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        StyleDescriptor::from(&TypeStyle::default())
    }
}

/// Styles of the document header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderStyle {
    pub title_size: f32,
    pub meta_color: String,
    pub meta_size: f32,
    pub card_anotation_size: f32,
    pub card_anotation_color: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            title_size: 22.0,
            meta_color: "#666666".to_string(),
            meta_size: 9.0,
            card_anotation_size: 7.0,
            card_anotation_color: "#999999".to_string(),
        }
    }
}

/// Document-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStyles {
    pub padding: f32,
    pub background_color: String,
    pub font_family: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub header: HeaderStyle,
    pub card_border_width: f32,
    pub card_border_color: String,
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            padding: 40.0,
            background_color: "#FFFFFF".to_string(),
            font_family: "Helvetica".to_string(),
            header: HeaderStyle::default(),
            card_border_width: 1.0,
            card_border_color: "#EEEEEE".to_string(),
        }
    }
}

/// The `styles` section of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Styles {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub global: GlobalStyles,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub types: IndexMap<StyleClass, TypeStyle>,
}

impl Styles {
    /// Base style for `class`, or `None` when the registry lacks it.
    pub fn type_style(&self, class: &StyleClass) -> Option<&TypeStyle> {
        self.types.get(class)
    }
}

/// Profiles written by hand use numbers and strings interchangeably for
/// weights and rule literals.
pub(crate) mod text {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    fn into_text<E: Error>(value: Value) -> Result<Option<String>, E> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text)),
            Value::Number(number) => Ok(Some(number.to_string())),
            Value::Bool(flag) => Ok(Some(flag.to_string())),
            other => Err(E::custom(format!("expected text, found {other}"))),
        }
    }

    pub(crate) fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        into_text(Value::deserialize(deserializer)?)?
            .ok_or_else(|| D::Error::custom("expected text, found null"))
    }

    pub(crate) fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        into_text(Value::deserialize(deserializer)?)
    }
}

/// Optional sections written as `null` read as their defaults.
pub(crate) mod nullable {
    use serde::de::{Deserialize, Deserializer};

    pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}
