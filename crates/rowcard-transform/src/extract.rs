//! Regular-expression extraction of derived fields.
//!
//! A field that declares both `sourceField` and `regex` is derived: its value
//! is cut out of the source column and written under the field's own id.
//! Patterns are compiled once per run in multi-line mode (`^`/`$` match at
//! line boundaries). A pattern that does not compile never aborts the run;
//! the derived value becomes [`REGEX_ERROR`] instead.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use rowcard_model::{FieldDef, Record};

/// Value written into a derived field whose pattern is invalid.
pub const REGEX_ERROR: &str = "Regex Error";

/// Compile a profile pattern with the extraction flags.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).multi_line(true).build()
}

/// Extract from `text`: trimmed group 1 when it matched non-empty text,
/// otherwise the trimmed whole match, or `""` when nothing matches.
pub fn extract_value(regex: &Regex, text: &str) -> String {
    let Some(captures) = regex.captures(text) else {
        return String::new();
    };
    let group = captures
        .get(1)
        .map(|group| group.as_str())
        .filter(|group| !group.is_empty());
    match group {
        Some(group) => group.trim().to_string(),
        None => captures
            .get(0)
            .map(|whole| whole.as_str().trim().to_string())
            .unwrap_or_default(),
    }
}

/// A derived field with its pattern compiled.
#[derive(Debug)]
pub struct Extraction<'a> {
    pub field_id: &'a str,
    pub source_field: &'a str,
    pub pattern: Result<Regex, regex::Error>,
}

impl Extraction<'_> {
    /// Derived value for one record.
    pub fn apply(&self, record: &Record) -> String {
        match &self.pattern {
            Ok(regex) => extract_value(regex, record.text(self.source_field)),
            Err(_) => REGEX_ERROR.to_string(),
        }
    }
}

/// Counts reported by [`FieldExtractor::extract_records`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub derived_fields: usize,
    pub invalid_patterns: usize,
}

/// Compiled extraction plan for a schema.
#[derive(Debug)]
pub struct FieldExtractor<'a> {
    extractions: Vec<Extraction<'a>>,
}

impl<'a> FieldExtractor<'a> {
    /// Compile every derived field of `schema`, in schema order.
    pub fn new(schema: &'a [FieldDef]) -> Self {
        let extractions = schema
            .iter()
            .filter_map(|field| {
                let (source_field, pattern) = field.extraction()?;
                let compiled = compile_pattern(pattern);
                if let Err(error) = &compiled {
                    warn!(
                        field_id = %field.id,
                        pattern = %pattern,
                        %error,
                        "invalid extraction pattern"
                    );
                }
                Some(Extraction {
                    field_id: field.id.as_str(),
                    source_field,
                    pattern: compiled,
                })
            })
            .collect();
        Self { extractions }
    }

    pub fn stats(&self) -> ExtractStats {
        ExtractStats {
            derived_fields: self.extractions.len(),
            invalid_patterns: self
                .extractions
                .iter()
                .filter(|extraction| extraction.pattern.is_err())
                .count(),
        }
    }

    /// Populate derived fields of one record.
    ///
    /// Each extraction reads the source as it was before this call, so a
    /// derived field never feeds another one. Later fields with the same id
    /// overwrite earlier ones.
    pub fn extract(&self, record: &Record) -> Record {
        let mut derived = record.clone();
        for extraction in &self.extractions {
            derived.set(extraction.field_id, extraction.apply(record));
        }
        derived
    }

    pub fn extract_records(&self, records: Vec<Record>) -> Vec<Record> {
        if self.extractions.is_empty() {
            return records;
        }
        let derived: Vec<Record> = records.iter().map(|record| self.extract(record)).collect();
        let stats = self.stats();
        debug!(
            rows = derived.len(),
            derived_fields = stats.derived_fields,
            invalid_patterns = stats.invalid_patterns,
            "fields extracted"
        );
        derived
    }
}

/// Populate derived fields of every record for `schema`.
pub fn extract_fields(records: Vec<Record>, schema: &[FieldDef]) -> Vec<Record> {
    FieldExtractor::new(schema).extract_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_first_group_trimmed() {
        let regex = compile_pattern(r"Ticket: (\S+)").expect("compile");
        assert_eq!(extract_value(&regex, "Ticket: ABC-123"), "ABC-123");
    }

    #[test]
    fn falls_back_to_whole_match_without_group() {
        let regex = compile_pattern(r"ABC-\d+").expect("compile");
        assert_eq!(extract_value(&regex, "see ABC-42 now"), "ABC-42");

        let regex = compile_pattern(r"ID:(\d*)\s*\w+").expect("compile");
        assert_eq!(extract_value(&regex, "ID: x "), "ID: x");
    }

    #[test]
    fn anchors_match_at_line_boundaries() {
        let regex = compile_pattern(r"^Owner: (.+)$").expect("compile");
        let text = "Summary line\nOwner: Jana Nováková \nTail";
        assert_eq!(extract_value(&regex, text), "Jana Nováková");
    }

    #[test]
    fn no_match_yields_empty() {
        let regex = compile_pattern(r"Ticket: (\S+)").expect("compile");
        assert_eq!(extract_value(&regex, "nothing here"), "");
    }

    #[test]
    fn invalid_pattern_yields_marker() {
        let schema = vec![FieldDef::new("ticket", "Ticket").with_extraction("Summary", "Ticket: (")];
        let record: Record = [("Summary", "Ticket: ABC-1")].into_iter().collect();
        let extracted = extract_fields(vec![record], &schema);
        assert_eq!(extracted[0].get("ticket"), Some(REGEX_ERROR));
        assert_eq!(FieldExtractor::new(&schema).stats().invalid_patterns, 1);
    }
}
