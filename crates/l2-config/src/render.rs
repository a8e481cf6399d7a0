//! Presentation labels and layout knobs.

use serde::{Deserialize, Serialize};

fn default_no_data_label() -> String {
    "No data".to_string()
}

fn default_tvl_tooltip() -> String {
    "Total value locked in escrow contracts on Ethereum displayed together with a percentage \
     change compared to 7D ago."
        .to_string()
}

const fn default_collapse_after() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RenderConfig {
    /// Text of the placeholder badge shown when a value is unavailable.
    #[serde(default = "default_no_data_label")]
    pub no_data_label: String,

    /// Info tooltip attached to the "Total value locked" cell.
    #[serde(default = "default_tvl_tooltip")]
    pub tvl_tooltip: String,

    /// Milestones beyond this count are folded behind a disclosure.
    #[serde(default = "default_collapse_after")]
    pub collapse_milestones_after: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            no_data_label: default_no_data_label(),
            tvl_tooltip: default_tvl_tooltip(),
            collapse_milestones_after: default_collapse_after(),
        }
    }
}
