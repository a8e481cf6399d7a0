//! The per-render view-model.
//!
//! A `ProjectEntry` is a read-only projection of a record enriched with
//! metrics. It owns no long-lived state and is discarded after render.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Lifecycle, Milestone, ProjectLinks, TokenValues};
use crate::enums::{ProjectCategory, Sentiment};

/// A display value with its color-coding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SentimentValue {
    pub value: String,
    pub sentiment: Sentiment,
}

impl SentimentValue {
    #[must_use]
    pub fn new(value: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            value: value.into(),
            sentiment,
        }
    }
}

/// A risk note attached to a token breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TokenWarning {
    pub sentiment: Sentiment,
    pub message: String,
}

impl TokenWarning {
    #[must_use]
    pub fn new(sentiment: Sentiment, message: impl Into<String>) -> Self {
        Self {
            sentiment,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TvlBreakdown {
    pub total: f64,
    pub total_change: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TokenBreakdown {
    pub values: TokenValues,
    pub associated_tokens: Vec<String>,
    pub warnings: Vec<TokenWarning>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TvlHeader {
    pub tvl_breakdown: TvlBreakdown,
    pub token_breakdown: TokenBreakdown,
}

/// Everything the stats panel and page header display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectHeader {
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Absent when the project is upcoming or metrics are unusable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl: Option<TvlHeader>,
    pub destination: SentimentValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_by: Option<SentimentValue>,
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectEntry {
    pub id: String,
    pub is_upcoming: bool,
    pub header: ProjectHeader,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl ProjectEntry {
    /// The tvl block presentation should use; never present for upcoming
    /// projects even if the header carries one.
    #[must_use]
    pub fn displayable_tvl(&self) -> Option<&TvlHeader> {
        if self.is_upcoming {
            return None;
        }
        self.header.tvl.as_ref()
    }
}
