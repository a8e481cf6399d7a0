//! JsonSchema validation of serialized records, snapshots, and entries.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use l2_core::entities::*;
use l2_core::enums::*;
use l2_core::time::UnixTime;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! schema_conforms {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val);

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn frame_record() -> ProjectRecord {
    ProjectRecord {
        id: "frame".into(),
        created_at: UnixTime::new(1_695_904_849),
        kind: ProjectKind::Layer2,
        is_upcoming: true,
        display: ProjectDisplay {
            name: "Frame".into(),
            slug: "frame".into(),
            description: "Frame is an Ethereum L2 designed to scale NFT adoption.".into(),
            purposes: BTreeSet::from(["Universal".to_string(), "NFT".to_string()]),
            category: ProjectCategory::OptimisticRollup,
            provider: Some("Arbitrum".into()),
            links: ProjectLinks {
                websites: vec!["https://frame.xyz/".into()],
                documentation: vec!["https://docs.frame.xyz/".into()],
                ..ProjectLinks::default()
            },
        },
        technology: ProjectTechnology::default(),
        lifecycle: Some(Lifecycle {
            status: LifecycleStatus::Defunct,
            note: Some("Team acquired in June 2024; links no longer work.".into()),
            successor: Some("abstract".into()),
        }),
        milestones: vec![Milestone {
            name: "Testnet launch".into(),
            link: "https://frame.xyz/".into(),
            date: Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap(),
            description: None,
            kind: MilestoneType::General,
        }],
    }
}

schema_conforms!(project_record_conforms, ProjectRecord, frame_record());

schema_conforms!(
    metrics_snapshot_conforms,
    MetricsSnapshot,
    MetricsSnapshot {
        tvl: Some(TvlMetrics {
            total: 1_000_000.0,
            total_change: 0.05,
            breakdown: TokenValues {
                associated: 100_000.0,
                ether: 600_000.0,
                stablecoin: 250_000.0,
                other: 50_000.0,
            },
            associated_tokens: vec!["ARB".into()],
            warnings: vec![TokenWarning::new(Sentiment::Bad, "ARB is minted on L2")],
        }),
        destination: None,
        validated_by: Some(SentimentValue::new("Third party", Sentiment::Bad)),
    }
);

schema_conforms!(
    project_entry_conforms,
    ProjectEntry,
    ProjectEntry {
        id: "frame".into(),
        is_upcoming: false,
        header: ProjectHeader {
            name: "Frame".into(),
            slug: "frame".into(),
            description: "NFT L2".into(),
            tvl: Some(TvlHeader {
                tvl_breakdown: TvlBreakdown {
                    total: 10.0,
                    total_change: -0.1,
                },
                token_breakdown: TokenBreakdown::default(),
            }),
            destination: SentimentValue::new("Ethereum", Sentiment::Neutral),
            validated_by: None,
            category: ProjectCategory::OptimisticRollup,
            lifecycle: None,
            links: ProjectLinks::default(),
        },
        milestones: Vec::new(),
    }
);

#[test]
fn milestone_type_field_is_named_type_on_the_wire() {
    let json = r#"{
        "name": "Creation of Arbitrum One",
        "link": "https://l2beat.com",
        "date": "2019-11-14T00:00:00Z",
        "type": "incident"
    }"#;
    let milestone: Milestone = serde_json::from_str(json).unwrap();
    assert_eq!(milestone.kind, MilestoneType::Incident);
    assert_eq!(milestone.description, None);
}
