//! Renderer-facing plan: header block, global styles and resolved cards.
//!
//! The plan carries every styling decision; a renderer only lays cards out,
//! wraps fields into rows by width and paginates.

use chrono::NaiveDate;
use serde::Serialize;

use rowcard_model::{
    DEFAULT_COLOR, FieldWidth, GlobalStyles, ProcessedRecord, Profile, StyleClass,
};

use crate::resolve::{ResolvedField, resolve_field};

/// Title shown when the profile has none.
pub const DEFAULT_TITLE: &str = "Export Reportu";
/// Project shown when the profile has none.
pub const DEFAULT_PROJECT: &str = "Nezadáno";
/// Date format of the header block (e.g. `18. 10. 2026`).
pub const HEADER_DATE_FORMAT: &str = "%-d. %-m. %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub title: String,
    pub title_color: String,
    pub title_size: f32,
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub generated_on: String,
    pub meta_color: String,
    pub meta_size: f32,
}

impl DocumentHeader {
    pub fn from_profile(profile: &Profile, generated_on: NaiveDate) -> Self {
        let header_style = &profile.styles.global.header;
        let title = match profile.meta.title.trim() {
            "" => DEFAULT_TITLE.to_string(),
            title => title.to_string(),
        };
        let project = profile
            .meta
            .project
            .as_deref()
            .map(str::trim)
            .filter(|project| !project.is_empty())
            .unwrap_or(DEFAULT_PROJECT)
            .to_string();
        Self {
            title,
            title_color: profile
                .type_style(&StyleClass::Title)
                .map_or_else(|| DEFAULT_COLOR.to_string(), |style| style.color.clone()),
            title_size: header_style.title_size,
            project,
            author: profile
                .meta
                .author
                .clone()
                .filter(|author| !author.trim().is_empty()),
            generated_on: generated_on.format(HEADER_DATE_FORMAT).to_string(),
            meta_color: header_style.meta_color.clone(),
            meta_size: header_style.meta_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderField {
    pub id: String,
    pub label: String,
    pub width: FieldWidth,
    pub grid_columns: u8,
    #[serde(flatten)]
    pub resolved: ResolvedField,
}

/// One card per visible record, fields in schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderCard {
    pub fields: Vec<RenderField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub header: DocumentHeader,
    pub global: GlobalStyles,
    pub cards: Vec<RenderCard>,
}

/// Resolve every schema field of every record into cards.
pub fn build_render_plan(
    profile: &Profile,
    records: &[ProcessedRecord],
    generated_on: NaiveDate,
) -> RenderPlan {
    let cards = records
        .iter()
        .map(|record| RenderCard {
            fields: profile
                .schema
                .iter()
                .map(|field| RenderField {
                    id: field.id.clone(),
                    label: field.label.clone(),
                    width: field.width,
                    grid_columns: field.width.grid_columns(),
                    resolved: resolve_field(profile, field, record),
                })
                .collect(),
        })
        .collect();
    RenderPlan {
        header: DocumentHeader::from_profile(profile, generated_on),
        global: profile.styles.global.clone(),
        cards,
    }
}
