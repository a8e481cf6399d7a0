use l2_core::entities::{
    ProjectDisplay, ProjectLinks, ProjectRecord, ProjectTechnology, SentimentValue,
};
use l2_core::enums::{ProjectCategory, ProjectKind, Sentiment};
use l2_core::time::UnixTime;

use super::{day, names, purposes, urls};
use crate::templates::bridge;

pub(super) fn records() -> Vec<ProjectRecord> {
    vec![across(), hop()]
}

fn hop() -> ProjectRecord {
    bridge(ProjectRecord {
        id: "hop".into(),
        created_at: UnixTime::from(day(2022, 4, 1)),
        kind: ProjectKind::Bridge,
        is_upcoming: false,
        display: ProjectDisplay {
            name: "Hop".into(),
            slug: "hop".into(),
            description: "Hop is a liquidity network moving tokens between rollups and \
                          Ethereum using bonders."
                .into(),
            purposes: purposes(&["Interoperability"]),
            category: ProjectCategory::LiquidityNetwork,
            provider: None,
            links: ProjectLinks {
                websites: urls(&["https://hop.exchange/"]),
                apps: urls(&["https://app.hop.exchange/"]),
                documentation: urls(&["https://docs.hop.exchange/"]),
                repositories: urls(&["https://github.com/hop-protocol"]),
                ..ProjectLinks::default()
            },
        },
        technology: ProjectTechnology {
            destination: names(&["Arbitrum", "OP Mainnet", "Polygon"]),
            validated_by: Some(SentimentValue::new("Optimistically", Sentiment::Warning)),
        },
        lifecycle: None,
        milestones: Vec::new(),
    })
}

fn across() -> ProjectRecord {
    bridge(ProjectRecord {
        id: "across".into(),
        created_at: UnixTime::from(day(2022, 5, 1)),
        kind: ProjectKind::Bridge,
        is_upcoming: false,
        display: ProjectDisplay {
            name: "Across".into(),
            slug: "across".into(),
            description: "Across is a token bridge relying on relayers and an optimistic \
                          oracle for settlement."
                .into(),
            purposes: purposes(&["Interoperability"]),
            category: ProjectCategory::TokenBridge,
            provider: None,
            links: ProjectLinks {
                websites: urls(&["https://across.to/"]),
                documentation: urls(&["https://docs.across.to/"]),
                ..ProjectLinks::default()
            },
        },
        technology: ProjectTechnology {
            destination: names(&["Arbitrum", "OP Mainnet"]),
            validated_by: None,
        },
        lifecycle: None,
        milestones: Vec::new(),
    })
}
