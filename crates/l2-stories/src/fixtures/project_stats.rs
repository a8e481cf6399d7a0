use l2_core::entities::{
    ProjectEntry, ProjectHeader, ProjectLinks, SentimentValue, TokenBreakdown, TokenValues,
    TokenWarning, TvlBreakdown, TvlHeader,
};
use l2_core::enums::{ProjectCategory, Sentiment};

use crate::story::{ArgOverrides, Meta, Story, StoryArgs, StorySet};

pub const COMPONENT: &str = "project-stats";

const BAD_WARNING: &str = "The total value locked includes a token whose escrow was drained; \
                           reported value may be overstated.";
const ASSOCIATED_WARNING: &str = "The ARB token associated with Arbitrum accounts for a large \
                                  share of the total value locked.";

#[must_use]
pub fn set() -> StorySet {
    StorySet {
        meta: Meta {
            component: COMPONENT,
            args: StoryArgs::ProjectStats { project: project() },
        },
        stories: vec![
            Story::new("Default", with(None)),
            Story::new("Upcoming", with(Some(upcoming()))),
            Story::new("NoValidator", with(Some(no_validator()))),
            Story::new("BadWarning", with(Some(bad_warning()))),
            Story::new("NoWarnings", with(Some(no_warnings()))),
        ],
    }
}

const fn with(project: Option<ProjectEntry>) -> ArgOverrides {
    ArgOverrides::ProjectStats { project }
}

fn project() -> ProjectEntry {
    ProjectEntry {
        id: "arbitrum".into(),
        is_upcoming: false,
        header: ProjectHeader {
            name: "Arbitrum One".into(),
            slug: "arbitrum".into(),
            description: "Arbitrum One is a general-purpose Optimistic Rollup.".into(),
            tvl: Some(TvlHeader {
                tvl_breakdown: TvlBreakdown {
                    total: 1_000_000.0,
                    total_change: 0.05,
                },
                token_breakdown: TokenBreakdown {
                    values: TokenValues {
                        associated: 400_000.0,
                        ether: 350_000.0,
                        stablecoin: 200_000.0,
                        other: 50_000.0,
                    },
                    associated_tokens: vec!["ARB".into()],
                    warnings: vec![TokenWarning::new(Sentiment::Warning, ASSOCIATED_WARNING)],
                },
            }),
            destination: SentimentValue::new("Ethereum", Sentiment::Good),
            validated_by: Some(SentimentValue::new("Ethereum", Sentiment::Good)),
            category: ProjectCategory::OptimisticRollup,
            lifecycle: None,
            links: ProjectLinks::default(),
        },
        milestones: Vec::new(),
    }
}

fn upcoming() -> ProjectEntry {
    ProjectEntry {
        is_upcoming: true,
        ..project()
    }
}

fn no_validator() -> ProjectEntry {
    let mut entry = project();
    entry.header.validated_by = None;
    entry
}

fn bad_warning() -> ProjectEntry {
    let mut entry = project();
    if let Some(tvl) = entry.header.tvl.as_mut() {
        tvl.token_breakdown
            .warnings
            .push(TokenWarning::new(Sentiment::Bad, BAD_WARNING));
    }
    entry
}

fn no_warnings() -> ProjectEntry {
    let mut entry = project();
    if let Some(tvl) = entry.header.tvl.as_mut() {
        tvl.token_breakdown.warnings.clear();
    }
    entry
}
