//! Closed enumerations used by records and view-models.
//!
//! All enums serialize as `snake_case` unless the wire form is a display
//! string (categories), in which case the display string is used verbatim.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

/// Color-coding attached to a derived metric.
///
/// `Neutral` renders exactly like `Good`; it exists so that a zero change is
/// not reported as positive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Good,
    #[default]
    Neutral,
    Warning,
    Bad,
}

impl Sentiment {
    /// Sentiment of a relative change: up is good, down is bad.
    ///
    /// Non-finite input is treated as no change.
    #[must_use]
    pub fn from_change(change: f64) -> Self {
        if !change.is_finite() || change == 0.0 {
            Self::Neutral
        } else if change > 0.0 {
            Self::Good
        } else {
            Self::Bad
        }
    }

    /// Whether presentation should draw an icon next to the value.
    #[must_use]
    pub const fn needs_icon(self) -> bool {
        matches!(self, Self::Warning | Self::Bad)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectCategory
// ---------------------------------------------------------------------------

/// Technology category shown in the "Type" stat cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum ProjectCategory {
    #[serde(rename = "Optimistic Rollup")]
    OptimisticRollup,
    #[serde(rename = "ZK Rollup")]
    ZkRollup,
    #[serde(rename = "Validium")]
    Validium,
    #[serde(rename = "Optimium")]
    Optimium,
    #[serde(rename = "Plasma")]
    Plasma,
    #[serde(rename = "State Channel")]
    StateChannel,
    #[serde(rename = "Token Bridge")]
    TokenBridge,
    #[serde(rename = "Liquidity Network")]
    LiquidityNetwork,
    #[serde(rename = "Other")]
    Other,
}

impl ProjectCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OptimisticRollup => "Optimistic Rollup",
            Self::ZkRollup => "ZK Rollup",
            Self::Validium => "Validium",
            Self::Optimium => "Optimium",
            Self::Plasma => "Plasma",
            Self::StateChannel => "State Channel",
            Self::TokenBridge => "Token Bridge",
            Self::LiquidityNetwork => "Liquidity Network",
            Self::Other => "Other",
        }
    }

    /// Parse the display form, ignoring ASCII case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        [
            Self::OptimisticRollup,
            Self::ZkRollup,
            Self::Validium,
            Self::Optimium,
            Self::Plasma,
            Self::StateChannel,
            Self::TokenBridge,
            Self::LiquidityNetwork,
            Self::Other,
        ]
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectKind
// ---------------------------------------------------------------------------

/// Which section of the site a record belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    #[default]
    Layer2,
    Bridge,
}

impl ProjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layer2 => "layer2",
            Self::Bridge => "bridge",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LinkKind
// ---------------------------------------------------------------------------

/// Kind of an external link attached to a project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Websites,
    Apps,
    Documentation,
    Explorers,
    Repositories,
    SocialMedia,
}

impl LinkKind {
    /// Every kind in display order.
    pub const ALL: [Self; 6] = [
        Self::Websites,
        Self::Apps,
        Self::Documentation,
        Self::Explorers,
        Self::Repositories,
        Self::SocialMedia,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Websites => "websites",
            Self::Apps => "apps",
            Self::Documentation => "documentation",
            Self::Explorers => "explorers",
            Self::Repositories => "repositories",
            Self::SocialMedia => "social_media",
        }
    }

    /// Human label used by the links list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Websites => "Website",
            Self::Apps => "App",
            Self::Documentation => "Docs",
            Self::Explorers => "Explorer",
            Self::Repositories => "Repository",
            Self::SocialMedia => "Social",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LifecycleStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a project record.
///
/// ```text
/// active → deprecated → defunct
///        → renamed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    #[default]
    Active,
    Deprecated,
    Renamed,
    Defunct,
}

impl LifecycleStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deprecated => "deprecated",
            Self::Renamed => "renamed",
            Self::Defunct => "defunct",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Deprecated => "Deprecated",
            Self::Renamed => "Renamed",
            Self::Defunct => "Defunct",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MilestoneType
// ---------------------------------------------------------------------------

/// Kind of an entry in the milestones & incidents timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    #[default]
    General,
    Incident,
}

impl MilestoneType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Incident => "incident",
        }
    }
}

impl fmt::Display for MilestoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
