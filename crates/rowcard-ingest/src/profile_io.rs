//! Loading and saving profile files.

use std::path::Path;

use tracing::debug;

use rowcard_model::Profile;

use crate::error::{IngestError, Result};

/// Load a profile from a UTF-8 JSON file.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let profile = Profile::from_json_str(&text).map_err(|source| IngestError::Profile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        fields = profile.schema.len(),
        style_classes = profile.styles.types.len(),
        "profile loaded"
    );
    Ok(profile)
}

/// Write a profile as pretty-printed JSON, replacing any existing file.
pub fn save_profile(profile: &Profile, path: &Path) -> Result<()> {
    let text = profile
        .to_json_pretty()
        .map_err(|source| IngestError::Profile {
            path: path.to_path_buf(),
            source,
        })?;
    std::fs::write(path, text).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
