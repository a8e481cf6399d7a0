//! Entity structs for records, metrics snapshots, and view-models.

pub mod entry;
pub mod metrics;
pub mod milestone;
pub mod record;

pub use entry::*;
pub use metrics::*;
pub use milestone::*;
pub use record::*;
