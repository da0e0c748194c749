use rust_decimal::Decimal;

use crate::models::Tier;

/// Strictly descending balance cutoffs for one coin's tier boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    pub whale: Decimal,
    pub large: Decimal,
    pub medium: Decimal,
}

impl ThresholdSet {
    /// Balance tier for a non-exchange wallet. A balance equal to a cutoff
    /// lands in the higher tier (the `>=` comparisons).
    pub fn tier_for(&self, balance: Decimal) -> Tier {
        if balance >= self.whale {
            Tier::Whales
        } else if balance >= self.large {
            Tier::Large
        } else if balance >= self.medium {
            Tier::Medium
        } else {
            Tier::Small
        }
    }
}

/// Threshold profile lookup by coin id.
///
/// Exact-match only: ids without their own profile use the default set.
/// Coin 1 is the native-unit profile (whole-coin balances); everything
/// else is assumed to be token-scale supply.
pub fn for_coin(coin_id: i64) -> ThresholdSet {
    match coin_id {
        1 => ThresholdSet {
            whale: Decimal::from(1_000),
            large: Decimal::from(100),
            medium: Decimal::from(10),
        },
        _ => ThresholdSet {
            whale: Decimal::from(1_000_000),
            large: Decimal::from(100_000),
            medium: Decimal::from(10_000),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
