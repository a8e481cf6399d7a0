//! Number formatting policy.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest number of fraction digits the formatter accepts.
pub const MAX_DECIMALS: u8 = 8;

fn default_symbol() -> String {
    "$".to_string()
}

fn default_grouping() -> String {
    ",".to_string()
}

fn default_decimal_point() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FormatConfig {
    /// Currency symbol placed before the amount.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Fraction digits for full (non-compact) amounts.
    #[serde(default)]
    pub decimals: u8,

    /// Thousands separator. Empty disables grouping.
    #[serde(default = "default_grouping")]
    pub grouping: String,

    #[serde(default = "default_decimal_point")]
    pub decimal_point: String,

    /// Abbreviate large amounts (`$1.20M`).
    #[serde(default)]
    pub compact: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimals: 0,
            grouping: default_grouping(),
            decimal_point: default_decimal_point(),
            compact: false,
        }
    }
}

impl FormatConfig {
    /// Check field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "format.symbol".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "format.decimals".into(),
                reason: format!("must be at most {MAX_DECIMALS}"),
            });
        }
        if self.decimal_point.is_empty() || self.decimal_point == self.grouping {
            return Err(ConfigError::InvalidValue {
                field: "format.decimal_point".into(),
                reason: "must be non-empty and differ from the grouping separator".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usd_whole_dollars() {
        let config = FormatConfig::default();
        assert_eq!(config.symbol, "$");
        assert_eq!(config.decimals, 0);
        assert_eq!(config.grouping, ",");
        assert_eq!(config.decimal_point, ".");
        assert!(!config.compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_too_many_decimals() {
        let config = FormatConfig {
            decimals: 9,
            ..FormatConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "format.decimals"
        ));
    }

    #[test]
    fn rejects_ambiguous_separators() {
        let config = FormatConfig {
            grouping: ".".into(),
            ..FormatConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
