use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ChangePeriod, Wallet};

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Balance-size category a wallet lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Exchanges,
    Whales,
    Large,
    Medium,
    Small,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Exchanges,
        Tier::Whales,
        Tier::Large,
        Tier::Medium,
        Tier::Small,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Exchanges => "exchanges",
            Tier::Whales => "whales",
            Tier::Large => "large",
            Tier::Medium => "medium",
            Tier::Small => "small",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TierBucket / WalletTiers
// ---------------------------------------------------------------------------

/// One tier's share of a classified wallet set: the member wallets
/// (input order preserved), their summed balance, and the weighted
/// change per observation period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBucket {
    pub wallets: Vec<Wallet>,
    pub total_balance: Decimal,
    pub changes: BTreeMap<ChangePeriod, Decimal>,
}

impl TierBucket {
    /// A bucket with no members: zero total, zero change for every period.
    pub fn empty() -> Self {
        Self {
            wallets: Vec::new(),
            total_balance: Decimal::ZERO,
            changes: ChangePeriod::ALL
                .iter()
                .map(|&p| (p, Decimal::ZERO))
                .collect(),
        }
    }
}

/// Full classification output: exactly five named buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTiers {
    pub exchanges: TierBucket,
    pub whales: TierBucket,
    pub large: TierBucket,
    pub medium: TierBucket,
    pub small: TierBucket,
}

impl WalletTiers {
    pub fn get(&self, tier: Tier) -> &TierBucket {
        match tier {
            Tier::Exchanges => &self.exchanges,
            Tier::Whales => &self.whales,
            Tier::Large => &self.large,
            Tier::Medium => &self.medium,
            Tier::Small => &self.small,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &TierBucket)> + '_ {
        Tier::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// Total number of wallets across all five buckets.
    pub fn wallet_count(&self) -> usize {
        self.iter().map(|(_, b)| b.wallets.len()).sum()
    }
}
