//! Story sets, one module per component.

pub mod milestones;
pub mod project_stats;
pub mod token_breakdown;

use chrono::{DateTime, NaiveDate, Utc};

use crate::story::StorySet;

#[must_use]
pub fn all() -> Vec<StorySet> {
    vec![
        project_stats::set(),
        token_breakdown::set(),
        milestones::set(),
    ]
}

/// Midnight UTC; the epoch for impossible dates.
fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
