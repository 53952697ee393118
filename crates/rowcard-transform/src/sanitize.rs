//! Row sanitizing: blank and comment rows, comment lines inside values.

use tracing::debug;

use rowcard_model::Record;

/// Marker that comments out a row or a line of a value.
pub const COMMENT_MARKER: &str = "//";

/// True when every value is null or empty (or the record has no fields).
pub fn is_blank_record(record: &Record) -> bool {
    record
        .values()
        .all(|value| value.is_none_or(str::is_empty))
}

/// True when any value, trimmed, starts with the comment marker.
pub fn is_comment_record(record: &Record) -> bool {
    record
        .values()
        .flatten()
        .any(|value| value.trim().starts_with(COMMENT_MARKER))
}

/// Drop comment lines from a value and trim the result.
///
/// Remaining lines keep their order and inner whitespace.
pub fn strip_comment_lines(value: &str) -> String {
    value
        .split('\n')
        .filter(|line| !line.trim().starts_with(COMMENT_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Sanitize a single record that survived row filtering.
pub fn sanitize_record(record: &Record) -> Record {
    let mut sanitized = record.clone();
    for (_, value) in sanitized.iter_mut() {
        if let Some(text) = value {
            *text = strip_comment_lines(text);
        }
    }
    sanitized
}

/// Drop blank and comment rows, then strip comment lines from every value.
pub fn sanitize_records(records: &[Record]) -> Vec<Record> {
    let mut blank = 0usize;
    let mut commented = 0usize;
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        if is_blank_record(record) {
            blank += 1;
            continue;
        }
        if is_comment_record(record) {
            commented += 1;
            continue;
        }
        kept.push(sanitize_record(record));
    }
    debug!(
        input = records.len(),
        kept = kept.len(),
        blank,
        commented,
        "rows sanitized"
    );
    kept
}
