//! JSON rows (an array of flat objects) into records.

use std::path::Path;

use serde_json::Value;

use rowcard_model::Record;

use crate::csv_records::RecordTable;
use crate::error::{IngestError, Result};

pub fn read_json_records(path: &Path) -> Result<RecordTable> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    parse_json_records(&text, path)
}

/// Parse rows from JSON text.
///
/// Strings are kept, `null` stays null, numbers and booleans are converted to
/// text the way a spreadsheet export would show them. Headers are the union of
/// keys in first-seen order.
pub fn parse_json_records(text: &str, origin: &Path) -> Result<RecordTable> {
    let invalid = |message: String| IngestError::JsonRows {
        path: origin.to_path_buf(),
        message,
    };
    let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
    let Value::Array(rows) = value else {
        return Err(invalid("expected an array of objects".to_string()));
    };

    let mut headers: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let Value::Object(fields) = row else {
            return Err(invalid(format!("row {index} is not an object")));
        };
        let mut record = Record::new();
        for (key, value) in fields {
            if !headers.contains(&key) {
                headers.push(key.clone());
            }
            match value {
                Value::Null => record.set_null(key),
                Value::String(text) => record.set(key, text),
                Value::Number(number) => record.set(key, number.to_string()),
                Value::Bool(flag) => record.set(key, flag.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(invalid(format!(
                        "row {index}, column `{key}`: nested values are not supported"
                    )));
                }
            }
        }
        records.push(record);
    }
    Ok(RecordTable { headers, records })
}
