//! Shape of the snapshot supplied by the metrics collaborator.
//!
//! Values are taken as-is; nothing here is validated. The view builder
//! decides what is displayable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{SentimentValue, TokenWarning};

/// Live metrics for a single project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MetricsSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl: Option<TvlMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<SentimentValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_by: Option<SentimentValue>,
}

/// Total value locked with its per-asset decomposition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TvlMetrics {
    /// USD value.
    pub total: f64,
    /// Relative change against seven days ago (`0.05` is +5%).
    pub total_change: f64,
    #[serde(default)]
    pub breakdown: TokenValues,
    #[serde(default)]
    pub associated_tokens: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<TokenWarning>,
}

/// USD value per asset bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TokenValues {
    #[serde(default)]
    pub associated: f64,
    #[serde(default)]
    pub ether: f64,
    #[serde(default)]
    pub stablecoin: f64,
    #[serde(default)]
    pub other: f64,
}

impl TokenValues {
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.associated + self.ether + self.stablecoin + self.other
    }
}
