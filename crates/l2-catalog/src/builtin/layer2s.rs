use l2_core::entities::{
    Lifecycle, Milestone, ProjectDisplay, ProjectLinks, ProjectRecord, ProjectTechnology,
};
use l2_core::enums::{LifecycleStatus, MilestoneType, ProjectCategory, ProjectKind};
use l2_core::time::UnixTime;

use super::{day, purposes, urls};
use crate::templates::{live_l2, upcoming_l2};

pub(super) fn records() -> Vec<ProjectRecord> {
    vec![arbitrum(), frame(), optimism()]
}

fn frame() -> ProjectRecord {
    upcoming_l2(ProjectRecord {
        id: "frame".into(),
        // 2023-09-28T12:40:49Z
        created_at: UnixTime::new(1_695_904_849),
        kind: ProjectKind::Layer2,
        is_upcoming: true,
        display: ProjectDisplay {
            name: "Frame".into(),
            slug: "frame".into(),
            description: "Frame is an Ethereum L2 designed to scale NFT adoption across the \
                          Ethereum ecosystem utilizing Arbitrum Nitro technology."
                .into(),
            purposes: purposes(&["Universal", "NFT"]),
            category: ProjectCategory::OptimisticRollup,
            provider: Some("Arbitrum".into()),
            links: ProjectLinks {
                websites: urls(&["https://frame.xyz/"]),
                apps: Vec::new(),
                documentation: urls(&["https://docs.frame.xyz/"]),
                explorers: urls(&["https://explorer.testnet.frame.xyz/"]),
                repositories: urls(&["https://github.com/frame-network"]),
                social_media: urls(&[
                    "https://twitter.com/frame_xyz",
                    "https://discord.gg/framexyz",
                ]),
            },
        },
        technology: ProjectTechnology::default(),
        lifecycle: Some(Lifecycle {
            status: LifecycleStatus::Defunct,
            note: Some(
                "Frame team bought by Igloo Inc. in June 2024. Will contribute to Abstract \
                 network. Links no longer work."
                    .into(),
            ),
            successor: None,
        }),
        milestones: Vec::new(),
    })
}

fn arbitrum() -> ProjectRecord {
    live_l2(ProjectRecord {
        id: "arbitrum".into(),
        created_at: UnixTime::from(day(2021, 8, 31)),
        kind: ProjectKind::Layer2,
        is_upcoming: false,
        display: ProjectDisplay {
            name: "Arbitrum One".into(),
            slug: "arbitrum".into(),
            description: "Arbitrum One is a general-purpose Optimistic Rollup built by \
                          Offchain Labs."
                .into(),
            purposes: purposes(&["Universal"]),
            category: ProjectCategory::OptimisticRollup,
            provider: Some("Arbitrum".into()),
            links: ProjectLinks {
                websites: urls(&["https://arbitrum.io/"]),
                apps: urls(&["https://bridge.arbitrum.io/"]),
                documentation: urls(&["https://docs.arbitrum.io/"]),
                explorers: urls(&["https://arbiscan.io/"]),
                repositories: urls(&["https://github.com/OffchainLabs"]),
                social_media: urls(&["https://twitter.com/arbitrum"]),
            },
        },
        technology: ProjectTechnology::default(),
        lifecycle: None,
        milestones: vec![
            Milestone {
                name: "Creation of Arbitrum One".into(),
                link: "https://l2beat.com".into(),
                date: day(2019, 11, 14),
                description: None,
                kind: MilestoneType::General,
            },
            Milestone {
                name: "Arbitrum Odyssey begins".into(),
                link: "https://l2beat.com".into(),
                date: day(2022, 6, 25),
                description: Some("A seven-week campaign to onboard users onto Arbitrum.".into()),
                kind: MilestoneType::General,
            },
            Milestone {
                name: "Nitro upgrade is activated".into(),
                link: "https://l2beat.com".into(),
                date: day(2022, 8, 31),
                description: Some("Arbitrum One migrates to the Nitro stack.".into()),
                kind: MilestoneType::General,
            },
        ],
    })
}

fn optimism() -> ProjectRecord {
    live_l2(ProjectRecord {
        id: "optimism".into(),
        created_at: UnixTime::from(day(2021, 12, 16)),
        kind: ProjectKind::Layer2,
        is_upcoming: false,
        display: ProjectDisplay {
            name: "OP Mainnet".into(),
            slug: "op-mainnet".into(),
            description: "OP Mainnet is an EVM-equivalent Optimistic Rollup.".into(),
            purposes: purposes(&["Universal"]),
            category: ProjectCategory::OptimisticRollup,
            provider: Some("OP Stack".into()),
            links: ProjectLinks {
                websites: urls(&["https://optimism.io/"]),
                documentation: urls(&["https://docs.optimism.io/"]),
                explorers: urls(&["https://optimistic.etherscan.io/"]),
                repositories: urls(&["https://github.com/ethereum-optimism"]),
                ..ProjectLinks::default()
            },
        },
        technology: ProjectTechnology::default(),
        lifecycle: None,
        milestones: Vec::new(),
    })
}
