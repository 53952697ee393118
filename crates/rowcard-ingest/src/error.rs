//! Error types for data and profile ingestion.

use std::path::PathBuf;
use thiserror::Error;

use rowcard_model::ProfileError;

/// Errors that can occur while loading rows or profile files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON rows file is not an array of flat objects.
    #[error("invalid JSON rows in {path}: {message}")]
    JsonRows { path: PathBuf, message: String },

    /// Extension is neither `.csv` nor `.json`.
    #[error("unsupported data file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Profile file exists but is not a valid profile.
    #[error("failed to load profile {path}: {source}")]
    Profile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound { path }
        } else {
            IngestError::FileRead { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
