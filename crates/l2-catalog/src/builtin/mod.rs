//! Records compiled into the binary.

mod bridges;
mod layer2s;

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use l2_core::entities::ProjectRecord;

/// Every built-in record, layer 2s first.
#[must_use]
pub fn records() -> Vec<ProjectRecord> {
    let mut records = layer2s::records();
    records.extend(bridges::records());
    records
}

fn urls(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Chain names, such as a bridge's destinations.
fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn purposes(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Midnight UTC on the given calendar day; the epoch for impossible dates.
fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
