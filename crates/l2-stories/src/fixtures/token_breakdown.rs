use l2_core::entities::{TokenValues, TokenWarning};
use l2_core::enums::Sentiment;

use crate::story::{ArgOverrides, Meta, Story, StoryArgs, StorySet};

pub const COMPONENT: &str = "token-breakdown";

#[must_use]
pub fn set() -> StorySet {
    let base = StoryArgs::TokenBreakdown {
        values: TokenValues {
            associated: 1_200.0,
            ether: 3_000.0,
            stablecoin: 1_500.0,
            other: 300.0,
        },
        associated_tokens: vec!["OP".into()],
        warnings: vec![TokenWarning::new(
            Sentiment::Warning,
            "The OP token associated with OP Mainnet accounts for a large share of the total \
             value locked.",
        )],
    };
    let unchanged = ArgOverrides::TokenBreakdown {
        values: None,
        associated_tokens: None,
        warnings: None,
    };
    let empty = ArgOverrides::TokenBreakdown {
        values: Some(TokenValues::default()),
        associated_tokens: Some(Vec::new()),
        warnings: Some(Vec::new()),
    };

    StorySet {
        meta: Meta {
            component: COMPONENT,
            args: base,
        },
        stories: vec![Story::new("Default", unchanged), Story::new("Empty", empty)],
    }
}
