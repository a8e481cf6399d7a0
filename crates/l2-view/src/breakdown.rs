//! Token breakdown shares.

use l2_core::entities::TokenValues;
use serde::Serialize;

/// Fraction of the breakdown total held in each asset bucket.
///
/// Shares are in `[0, 1]` and sum to `1` unless the total is zero, in which
/// case every share is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TokenShares {
    pub associated: f64,
    pub ether: f64,
    pub stablecoin: f64,
    pub other: f64,
}

impl TokenShares {
    /// Buckets in display order with their labels.
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, f64); 4] {
        [
            ("Associated tokens", self.associated),
            ("Ether & derivatives", self.ether),
            ("Stablecoins", self.stablecoin),
            ("Other", self.other),
        ]
    }
}

/// Compute per-bucket shares. Negative or non-finite bucket values count as
/// zero.
#[must_use]
pub fn token_shares(values: &TokenValues) -> TokenShares {
    let clean = |value: f64| if value.is_finite() && value > 0.0 { value } else { 0.0 };
    let associated = clean(values.associated);
    let ether = clean(values.ether);
    let stablecoin = clean(values.stablecoin);
    let other = clean(values.other);

    let total = associated + ether + stablecoin + other;
    if total <= 0.0 {
        return TokenShares::default();
    }
    TokenShares {
        associated: associated / total,
        ether: ether / total,
        stablecoin: stablecoin / total,
        other: other / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_one() {
        let shares = token_shares(&TokenValues {
            associated: 100.0,
            ether: 600.0,
            stablecoin: 250.0,
            other: 50.0,
        });
        assert!((shares.ether - 0.6).abs() < 1e-12);
        assert!((shares.associated - 0.1).abs() < 1e-12);
        let sum = shares.associated + shares.ether + shares.stablecoin + shares.other;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        assert_eq!(token_shares(&TokenValues::default()), TokenShares::default());
    }

    #[test]
    fn bad_values_are_ignored() {
        let shares = token_shares(&TokenValues {
            associated: -5.0,
            ether: f64::NAN,
            stablecoin: 10.0,
            other: 0.0,
        });
        assert!((shares.stablecoin - 1.0).abs() < f64::EPSILON);
        assert!(shares.associated.abs() < f64::EPSILON);
        assert!(shares.ether.abs() < f64::EPSILON);
    }
}
