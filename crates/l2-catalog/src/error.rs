//! Catalog error types.

use std::path::PathBuf;

use l2_core::CoreError;
use thiserror::Error;

/// Errors raised while assembling the record store.
///
/// Lookups never produce these; an unknown key is a
/// [`Lookup::NotFound`](crate::Lookup::NotFound), not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("duplicate project id: {0}")]
    DuplicateId(String),

    /// Two records share a slug.
    #[error("duplicate slug '{slug}' (projects '{first}' and '{second}')")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// A record failed field validation.
    #[error("invalid record '{id}': {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: CoreError,
    },

    /// A record file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file could not be parsed.
    #[error("failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The file extension is neither `toml` nor `json`.
    #[error("unsupported record file format: {0}")]
    UnsupportedFormat(PathBuf),
}
