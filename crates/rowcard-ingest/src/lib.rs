pub mod csv_records;
pub mod error;
pub mod json_rows;
pub mod profile_io;

use std::path::Path;

pub use csv_records::{RecordTable, read_csv_records, read_csv_records_from};
pub use error::{IngestError, Result};
pub use json_rows::{parse_json_records, read_json_records};
pub use profile_io::{load_profile, save_profile};

/// Read a data file, choosing the reader from its extension.
pub fn read_records(path: &Path) -> Result<RecordTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_records(path),
        Some("json") => read_json_records(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
