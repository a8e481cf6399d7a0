//! Stateless presentation components.
//!
//! Each component is a pure function from its inputs to [`Html`](crate::Html).

pub mod badge;
pub mod breakdown;
pub mod header;
pub mod icons;
pub mod milestones;
pub mod sentiment;
pub mod stats;
pub mod tooltip;
pub mod value;

pub use badge::no_data_badge;
pub use breakdown::{token_breakdown, token_breakdown_tooltip_content};
pub use header::project_header;
pub use icons::{info_icon, rounded_warning_icon};
pub use milestones::milestones_section;
pub use sentiment::sentiment_text;
pub use stats::{ProjectStat, project_stat, project_stats};
pub use tooltip::tooltip;
pub use value::value_with_percentage_change;
