use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize profile: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("field index {index} out of range (schema has {len} fields)")]
    FieldIndex { index: usize, len: usize },

    #[error("unknown style class: {name}")]
    UnknownStyleClass { name: String },

    #[error("cannot edit profile at `{path}`: {message}")]
    InvalidPath { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
