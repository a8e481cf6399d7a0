//! Cross-cutting error types for the catalog.
//!
//! Domain-specific errors (`ConfigError`, `CatalogError`, `StoryError`) are
//! defined in their respective crates. The render path has no error type: it
//! degrades to placeholders instead.

use thiserror::Error;

/// Errors that can be raised by record and identifier validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("project not found: {key}")]
    NotFound { key: String },

    /// A slug contains characters that are not URL-safe.
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// A link is not an absolute http(s) URL.
    #[error("Invalid link for project '{project}': {url}")]
    InvalidLink { project: String, url: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
