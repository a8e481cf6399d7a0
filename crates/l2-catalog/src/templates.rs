//! Record templates applied when declaring projects.

use l2_core::entities::ProjectRecord;
use l2_core::enums::ProjectKind;

/// Declare a layer 2 that is announced but not live.
///
/// Upcoming projects never display live metrics, so any static validator
/// claim is dropped as well.
#[must_use]
pub fn upcoming_l2(mut record: ProjectRecord) -> ProjectRecord {
    record.kind = ProjectKind::Layer2;
    record.is_upcoming = true;
    record.technology.validated_by = None;
    record
}

/// Declare a live layer 2.
#[must_use]
pub fn live_l2(mut record: ProjectRecord) -> ProjectRecord {
    record.kind = ProjectKind::Layer2;
    record.is_upcoming = false;
    record
}

/// Declare a bridge.
#[must_use]
pub fn bridge(mut record: ProjectRecord) -> ProjectRecord {
    record.kind = ProjectKind::Bridge;
    record
}
