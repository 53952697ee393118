//! The profile: document metadata, style layers and the ordered field schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProfileError, Result};
use crate::style::{StyleClass, StylePatch, Styles, TypeStyle, nullable, text};

/// Token in `FieldDef::link` replaced by the field value.
pub const LINK_PLACEHOLDER: &str = "${}";

/// Free-form display metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMeta {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Profile name used when saving an edited copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Horizontal share of a card row occupied by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldWidth {
    #[serde(rename = "25%")]
    Quarter,
    #[serde(rename = "50%")]
    Half,
    #[serde(rename = "75%")]
    ThreeQuarters,
    #[default]
    #[serde(rename = "100%")]
    Full,
}

impl FieldWidth {
    pub const ALL: [FieldWidth; 4] = [
        FieldWidth::Quarter,
        FieldWidth::Half,
        FieldWidth::ThreeQuarters,
        FieldWidth::Full,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldWidth::Quarter => "25%",
            FieldWidth::Half => "50%",
            FieldWidth::ThreeQuarters => "75%",
            FieldWidth::Full => "100%",
        }
    }

    /// Span on a 12-column grid.
    pub fn grid_columns(self) -> u8 {
        match self {
            FieldWidth::Quarter => 3,
            FieldWidth::Half => 6,
            FieldWidth::ThreeQuarters => 9,
            FieldWidth::Full => 12,
        }
    }

    /// Next width in the 25% → 50% → 75% → 100% → 25% cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FieldWidth::Quarter => FieldWidth::Half,
            FieldWidth::Half => FieldWidth::ThreeQuarters,
            FieldWidth::ThreeQuarters => FieldWidth::Full,
            FieldWidth::Full => FieldWidth::Quarter,
        }
    }
}

/// Conditional clause evaluated against a field's resolved value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(deserialize_with = "text::required")]
    pub matches: String,
    /// Suppress the whole record when matched.
    #[serde(
        default,
        skip_serializing_if = "std::ops::Not::not",
        deserialize_with = "nullable::or_default"
    )]
    pub hide: bool,
    #[serde(flatten)]
    pub style: StylePatch,
}

impl Rule {
    pub fn new(matches: impl Into<String>) -> Self {
        Self {
            matches: matches.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hiding(mut self) -> Self {
        self.hide = true;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StylePatch) -> Self {
        self.style = style;
        self
    }
}

/// One entry of the display schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub id: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub label: String,
    #[serde(rename = "type", default, deserialize_with = "nullable::or_default")]
    pub class: StyleClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub width: FieldWidth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable::or_default"
    )]
    pub rules: Vec<Rule>,
}

impl FieldDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<StyleClass>) -> Self {
        self.class = class.into();
        self
    }

    #[must_use]
    pub fn with_extraction(mut self, source_field: impl Into<String>, regex: impl Into<String>) -> Self {
        self.source_field = Some(source_field.into());
        self.regex = Some(regex.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: FieldWidth) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_link(mut self, template: impl Into<String>) -> Self {
        self.link = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The `(sourceField, regex)` pair when this field is derived.
    pub fn extraction(&self) -> Option<(&str, &str)> {
        match (&self.source_field, &self.regex) {
            (Some(source), Some(pattern)) => Some((source.as_str(), pattern.as_str())),
            _ => None,
        }
    }
}

/// Declarative document configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub meta: ProfileMeta,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub styles: Styles,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub schema: Vec<FieldDef>,
}

impl Profile {
    /// Parse a profile from its JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ProfileError::Parse)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(ProfileError::Parse)
    }

    /// Serialize with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProfileError::Serialize)
    }

    pub fn to_json_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(ProfileError::Serialize)
    }

    pub fn type_style(&self, class: &StyleClass) -> Option<&TypeStyle> {
        self.styles.type_style(class)
    }

    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.schema.iter().find(|field| field.id == id)
    }

    /// File name for a saved copy of this profile.
    pub fn save_file_name(&self) -> String {
        let stem = self
            .meta
            .template
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("profile");
        format!("{stem}_updated.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_cycles_through_all_values() {
        let mut width = FieldWidth::Quarter;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(width);
            width = width.next();
        }
        assert_eq!(seen, FieldWidth::ALL.to_vec());
        assert_eq!(width, FieldWidth::Quarter);
    }

    #[test]
    fn extraction_requires_both_parts() {
        let field = FieldDef::new("ticket", "Ticket");
        assert!(field.extraction().is_none());
        let field = field.with_extraction("Summary", r"Ticket: (\S+)");
        assert_eq!(field.extraction(), Some(("Summary", r"Ticket: (\S+)")));
    }

    #[test]
    fn save_file_name_falls_back_to_profile() {
        let mut profile = Profile::default();
        assert_eq!(profile.save_file_name(), "profile_updated.json");
        profile.meta.template = Some("jira".to_string());
        assert_eq!(profile.save_file_name(), "jira_updated.json");
    }
}
