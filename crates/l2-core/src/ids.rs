//! Identifier and slug helpers.
//!
//! Slugs are lowercase ASCII alphanumerics separated by single hyphens:
//! `arbitrum`, `polygon-zkevm`, `frame`.

use crate::errors::CoreError;

/// Maximum accepted slug length.
pub const MAX_SLUG_LEN: usize = 64;

/// Validate that `slug` is URL-safe.
///
/// # Errors
///
/// Returns [`CoreError::InvalidSlug`] naming the first violated rule.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let invalid = |reason: &str| CoreError::InvalidSlug {
        slug: slug.to_string(),
        reason: reason.to_string(),
    };

    if slug.is_empty() {
        return Err(invalid("empty"));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(invalid("too long"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(invalid("leading or trailing hyphen"));
    }
    if slug.contains("--") {
        return Err(invalid("consecutive hyphens"));
    }
    if let Some(bad) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(invalid(&format!("unexpected character '{bad}'")));
    }
    Ok(())
}

/// Whether `url` is an absolute http(s) URL.
#[must_use]
pub fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.contains(char::is_whitespace))
}
