//! Profile-driven record transformation and style resolution.
//!
//! Stages, in pipeline order:
//!
//! - [`sanitize`]: drop blank and commented rows, strip comment lines
//! - [`extract`]: fill derived fields from regular expressions
//! - [`rules`]: hide rows and select style overrides
//! - [`resolve`]: per-field display text, style and link
//!
//! [`pipeline`] runs the first three; [`render`] applies the last one to every
//! visible record.

pub mod check;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod rules;
pub mod sanitize;

pub use check::check_profile;
pub use extract::{FieldExtractor, REGEX_ERROR, extract_fields};
pub use pipeline::{PipelineOutput, PipelineStats, process_records};
pub use render::{RenderCard, RenderField, RenderPlan, build_render_plan};
pub use resolve::{ResolvedField, process_text, resolve, resolve_field};
pub use rules::{RuleEngine, RuleStats, RuleVerdict, apply_rules};
pub use sanitize::sanitize_records;
