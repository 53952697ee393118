//! Copy-on-write edits of a [`Profile`].
//!
//! Every operation borrows the current profile and returns an edited copy, so
//! a profile handed to the pipeline is never changed underneath it. Schema
//! order and field ids are preserved unless the edit targets them.

use serde_json::Value;

use crate::error::{ProfileError, Result};
use crate::profile::{FieldDef, Profile};
use crate::style::{StyleClass, TypeStyle};

/// Label given to fields added without one.
pub const NEW_FIELD_LABEL: &str = "Nové pole";

impl Profile {
    #[must_use]
    pub fn with_meta_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.meta.title = title.into();
        next
    }

    /// Replace the schema with one body field per column header.
    #[must_use]
    pub fn with_schema_from_headers<I, S>(&self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        next.schema = headers
            .into_iter()
            .map(|header| {
                let header = header.as_ref();
                FieldDef::new(header, header)
            })
            .collect();
        next
    }

    #[must_use]
    pub fn with_field_added(&self, field: FieldDef) -> Self {
        let mut next = self.clone();
        next.schema.push(field);
        next
    }

    /// Append a placeholder field named after its position.
    #[must_use]
    pub fn with_new_field(&self) -> Self {
        let id = format!("new_field_{}", self.schema.len() + 1);
        self.with_field_added(FieldDef::new(id, NEW_FIELD_LABEL))
    }

    pub fn without_field(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.schema.remove(index);
        Ok(next)
    }

    /// Move the field at `from` so it ends up at position `to`.
    pub fn with_field_moved(&self, from: usize, to: usize) -> Result<Self> {
        self.check_index(from)?;
        self.check_index(to)?;
        let mut next = self.clone();
        let field = next.schema.remove(from);
        next.schema.insert(to, field);
        Ok(next)
    }

    pub fn with_field_width_cycled(&self, index: usize) -> Result<Self> {
        self.with_field_updated(index, |field| field.width = field.width.next())
    }

    pub fn with_field_updated<F>(&self, index: usize, update: F) -> Result<Self>
    where
        F: FnOnce(&mut FieldDef),
    {
        self.check_index(index)?;
        let mut next = self.clone();
        update(&mut next.schema[index]);
        Ok(next)
    }

    /// Insert or replace a style class, keeping the position of an existing one.
    #[must_use]
    pub fn with_type_style(&self, class: impl Into<StyleClass>, style: TypeStyle) -> Self {
        let mut next = self.clone();
        next.styles.types.insert(class.into(), style);
        next
    }

    pub fn without_type(&self, class: &StyleClass) -> Result<Self> {
        let mut next = self.clone();
        if next.styles.types.shift_remove(class).is_none() {
            return Err(ProfileError::UnknownStyleClass {
                name: class.to_string(),
            });
        }
        Ok(next)
    }

    /// Set the value at a dot-separated path of the profile's JSON form.
    ///
    /// Intermediate objects must exist; numeric segments index into arrays.
    /// The edited document has to parse as a profile again.
    pub fn with_value_at(&self, path: &str, value: Value) -> Result<Self> {
        let invalid = |message: String| ProfileError::InvalidPath {
            path: path.to_string(),
            message,
        };
        let mut document = self.to_json_value()?;
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(invalid("empty path".to_string()));
        };
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid("empty path segment".to_string()));
        }
        let mut current = &mut document;
        for segment in parents {
            current = match current {
                Value::Object(map) => map
                    .get_mut(*segment)
                    .ok_or_else(|| invalid(format!("no key `{segment}`")))?,
                Value::Array(items) => {
                    let index: usize = segment
                        .parse()
                        .map_err(|_| invalid(format!("`{segment}` is not an index")))?;
                    let len = items.len();
                    items
                        .get_mut(index)
                        .ok_or_else(|| invalid(format!("index {index} out of range ({len})")))?
                }
                _ => return Err(invalid(format!("`{segment}` is not a container"))),
            };
        }
        match current {
            Value::Object(map) => {
                map.insert((*last).to_string(), value);
            }
            Value::Array(items) => {
                let index: usize = last
                    .parse()
                    .map_err(|_| invalid(format!("`{last}` is not an index")))?;
                let len = items.len();
                let slot = items
                    .get_mut(index)
                    .ok_or_else(|| invalid(format!("index {index} out of range ({len})")))?;
                *slot = value;
            }
            _ => return Err(invalid(format!("`{last}` has no container"))),
        }
        Profile::from_json_value(document)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.schema.len() {
            Ok(())
        } else {
            Err(ProfileError::FieldIndex {
                index,
                len: self.schema.len(),
            })
        }
    }
}
