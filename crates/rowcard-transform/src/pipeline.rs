//! The record pipeline: sanitize, extract, apply rules.
//!
//! ```ignore
//! use rowcard_transform::pipeline::process_records;
//!
//! let output = process_records(&rows, &profile, &PipelineOptions::default());
//! for record in &output.records {
//!     // hand to the style resolver / render plan
//! }
//! ```

use tracing::{info, info_span};

use rowcard_model::{PipelineOptions, ProcessedRecord, Profile, Record};

use crate::extract::FieldExtractor;
use crate::rules::RuleEngine;
use crate::sanitize::sanitize_records;

/// Row counts of one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub input_rows: usize,
    /// Rows removed as blank or commented out.
    pub dropped_rows: usize,
    /// Rows removed by `hide` rules.
    pub hidden_rows: usize,
    pub output_rows: usize,
    pub derived_fields: usize,
    pub invalid_patterns: usize,
}

/// Visible records in input order, with run statistics.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub records: Vec<ProcessedRecord>,
    pub stats: PipelineStats,
}

/// Run the full pipeline over `rows`.
///
/// The input rows are not modified; the output is a new sequence.
pub fn process_records(
    rows: &[Record],
    profile: &Profile,
    options: &PipelineOptions,
) -> PipelineOutput {
    let span = info_span!("pipeline", rows = rows.len(), fields = profile.schema.len());
    let _guard = span.enter();

    let sanitized = sanitize_records(rows);
    let dropped_rows = rows.len() - sanitized.len();

    let extractor = FieldExtractor::new(&profile.schema);
    let extracted = extractor.extract_records(sanitized);
    let extract_stats = extractor.stats();

    let (records, rule_stats) = RuleEngine::new(&profile.schema)
        .with_mode(options.rule_matching)
        .apply(extracted);

    let stats = PipelineStats {
        input_rows: rows.len(),
        dropped_rows,
        hidden_rows: rule_stats.hidden,
        output_rows: records.len(),
        derived_fields: extract_stats.derived_fields,
        invalid_patterns: extract_stats.invalid_patterns,
    };
    info!(
        input_rows = stats.input_rows,
        dropped_rows = stats.dropped_rows,
        hidden_rows = stats.hidden_rows,
        output_rows = stats.output_rows,
        "pipeline complete"
    );
    PipelineOutput { records, stats }
}
