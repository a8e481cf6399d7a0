//! # l2-view
//!
//! Derives display-ready [`ProjectEntry`](l2_core::entities::ProjectEntry)
//! values from immutable records plus a metrics snapshot, and formats the
//! numbers presentation shows.
//!
//! Nothing in this crate returns an error. Missing or unusable metrics are
//! dropped from the entry so presentation can show a "no data" placeholder.

pub mod breakdown;
pub mod builder;
pub mod format;

pub use breakdown::{TokenShares, token_shares};
pub use builder::{build_entry, is_any_token_warning_bad, warning_icon_sentiment};
pub use format::{format_currency, format_percentage, format_percentage_change};
