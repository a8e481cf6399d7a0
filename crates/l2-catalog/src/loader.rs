//! Record files on disk.
//!
//! TOML files hold a `[[projects]]` array; JSON files hold a bare array of
//! records. The file extension selects the format.

use std::path::Path;

use l2_core::entities::ProjectRecord;
use serde::Deserialize;

use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct TomlRecordFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Read every record declared in `path`.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be read,
/// [`CatalogError::Parse`] when its contents do not match the record shape,
/// and [`CatalogError::UnsupportedFormat`] for unknown extensions.
pub fn load_records(path: &Path) -> Result<Vec<ProjectRecord>, CatalogError> {
    let format = RecordFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&contents, format).map_err(|reason| CatalogError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded record file");
    Ok(records)
}

/// Serialization format of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Toml,
    Json,
}

impl RecordFormat {
    /// Pick the format from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse records from an in-memory document.
///
/// # Errors
///
/// Returns the deserializer's message on failure.
pub fn parse_records(contents: &str, format: RecordFormat) -> Result<Vec<ProjectRecord>, String> {
    match format {
        RecordFormat::Toml => toml::from_str::<TomlRecordFile>(contents)
            .map(|file| file.projects)
            .map_err(|error| error.to_string()),
        RecordFormat::Json => {
            serde_json::from_str::<Vec<ProjectRecord>>(contents).map_err(|error| error.to_string())
        }
    }
}
