//! Building entries from built-in records and assorted metrics snapshots.

use l2_catalog::ProjectStore;
use l2_core::entities::{MetricsSnapshot, SentimentValue, TokenValues, TokenWarning, TvlMetrics};
use l2_core::enums::{ProjectCategory, Sentiment};
use l2_view::build_entry;
use pretty_assertions::assert_eq;

fn snapshot(total: f64, total_change: f64) -> MetricsSnapshot {
    MetricsSnapshot {
        tvl: Some(TvlMetrics {
            total,
            total_change,
            breakdown: TokenValues {
                associated: 0.0,
                ether: total,
                stablecoin: 0.0,
                other: 0.0,
            },
            associated_tokens: vec!["ARB".into()],
            warnings: vec![TokenWarning::new(Sentiment::Warning, "Bridged tokens")],
        }),
        destination: None,
        validated_by: None,
    }
}

#[test]
fn live_project_with_metrics_gets_tvl() {
    let store = ProjectStore::builtin().unwrap();
    let record = store.get_by_id("arbitrum").unwrap();

    let entry = build_entry(record, Some(&snapshot(1_000_000.0, 0.05)));

    let tvl = entry.displayable_tvl().expect("tvl present");
    assert_eq!(tvl.tvl_breakdown.total, 1_000_000.0);
    assert_eq!(tvl.tvl_breakdown.total_change, 0.05);
    assert_eq!(tvl.token_breakdown.associated_tokens, vec!["ARB".to_string()]);
    assert_eq!(entry.header.category, ProjectCategory::OptimisticRollup);
    assert_eq!(
        entry.header.destination,
        SentimentValue::new("Ethereum", Sentiment::Neutral)
    );
    assert_eq!(entry.milestones.len(), 3);
}

#[test]
fn upcoming_project_never_gets_tvl() {
    let store = ProjectStore::builtin().unwrap();
    let frame = store.get_by_id("frame").unwrap();

    let entry = build_entry(frame, Some(&snapshot(5_000.0, 0.1)));

    assert!(entry.is_upcoming);
    assert!(entry.header.tvl.is_none());
    assert!(entry.displayable_tvl().is_none());
}

#[test]
fn missing_metrics_leave_tvl_absent() {
    let store = ProjectStore::builtin().unwrap();
    let record = store.get_by_id("optimism").unwrap();

    let entry = build_entry(record, None);
    assert!(entry.header.tvl.is_none());
    assert!(entry.header.validated_by.is_none());

    let empty = build_entry(record, Some(&MetricsSnapshot::default()));
    assert_eq!(entry, empty);
}

#[test]
fn malformed_tvl_degrades_to_no_data() {
    let store = ProjectStore::builtin().unwrap();
    let record = store.get_by_id("arbitrum").unwrap();

    for (total, change) in [(-1.0, 0.0), (f64::NAN, 0.0), (10.0, f64::INFINITY)] {
        let entry = build_entry(record, Some(&snapshot(total, change)));
        assert!(entry.header.tvl.is_none(), "total={total} change={change}");
    }
}

#[test]
fn bridge_destination_and_validator_come_from_record() {
    let store = ProjectStore::builtin().unwrap();
    let hop = store.get_by_id("hop").unwrap();

    let entry = build_entry(hop, None);
    assert_eq!(entry.header.destination.value, "Arbitrum, OP Mainnet, Polygon");
    assert_eq!(
        entry.header.validated_by,
        Some(SentimentValue::new("Optimistically", Sentiment::Warning))
    );
}

#[test]
fn metrics_override_static_fields_independently() {
    let store = ProjectStore::builtin().unwrap();
    let across = store.get_by_id("across").unwrap();

    let metrics = MetricsSnapshot {
        tvl: None,
        destination: None,
        validated_by: Some(SentimentValue::new("Third party", Sentiment::Bad)),
    };
    let entry = build_entry(across, Some(&metrics));

    assert_eq!(entry.header.destination.value, "Arbitrum, OP Mainnet");
    assert_eq!(
        entry.header.validated_by.map(|v| v.sentiment),
        Some(Sentiment::Bad)
    );
    assert!(entry.header.tvl.is_none());
}
