//! Raw and processed data records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::StylePatch;

/// One row of the input dataset: column name to nullable text.
///
/// Column order follows insertion order so rows read from a file keep the
/// header order when serialized again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a column; `None` when the column is absent or null.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|value| value.as_deref())
    }

    /// Value as text, treating absent and null columns as the empty string.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Set a text value, replacing any previous value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Some(value.into()));
    }

    pub fn set_null(&mut self, key: impl Into<String>) {
        self.fields.insert(key.into(), None);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.fields.values().map(|value| value.as_deref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Option<String>)> {
        self.fields.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        }
    }
}

/// A visible record paired with the style overrides its rules selected.
///
/// Overrides are keyed by field id; a field without an entry renders with its
/// base type style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRecord {
    pub record: Record,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub style_overrides: IndexMap<String, StylePatch>,
}

impl ProcessedRecord {
    pub fn style_override(&self, field_id: &str) -> Option<&StylePatch> {
        self.style_overrides.get(field_id)
    }
}
