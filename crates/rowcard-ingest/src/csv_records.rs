//! Delimited text into records.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use rowcard_model::Record;

use crate::error::{IngestError, Result};

/// Rows of one input file together with its column order.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read a CSV file whose first row holds the column names.
pub fn read_csv_records(path: &Path) -> Result<RecordTable> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::read(path, e))?;
    read_csv_records_from(file, path)
}

/// Read CSV from any reader; `origin` is only used in error messages.
///
/// Cell text is kept as-is (multi-line quoted cells included). Rows shorter
/// than the header are padded with empty values; surplus cells are dropped.
pub fn read_csv_records_from<R: Read>(reader: R, origin: &Path) -> Result<RecordTable> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: origin.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = reader.records();
    let Some(header_row) = rows.next() else {
        return Ok(RecordTable::default());
    };
    let headers: Vec<String> = header_row
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    for (idx, header) in headers.iter().enumerate() {
        if headers[..idx].contains(header) {
            warn!(path = %origin.display(), column = %header, "duplicate column name; later values win");
        }
    }

    let mut records = Vec::new();
    let mut surplus_rows = 0usize;
    for row in rows {
        let row = row.map_err(csv_error)?;
        if row.len() > headers.len() {
            surplus_rows += 1;
        }
        let mut record = Record::new();
        for (idx, header) in headers.iter().enumerate() {
            record.set(header.as_str(), row.get(idx).unwrap_or(""));
        }
        records.push(record);
    }
    if surplus_rows > 0 {
        debug!(path = %origin.display(), surplus_rows, "dropped cells beyond the header width");
    }
    debug!(
        path = %origin.display(),
        columns = headers.len(),
        rows = records.len(),
        "csv loaded"
    );
    Ok(RecordTable { headers, records })
}
