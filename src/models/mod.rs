pub mod category;
pub mod timeframe;
pub mod wallet;

pub use category::{Tier, TierBucket, WalletTiers};
pub use timeframe::Timeframe;
pub use wallet::{BalancePoint, Wallet, WalletSeries};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ChangePeriod
// ---------------------------------------------------------------------------

/// Observation period for a wallet's reported percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangePeriod {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "2w")]
    TwoWeeks,
    #[serde(rename = "1m")]
    Month,
}

impl ChangePeriod {
    pub const ALL: [ChangePeriod; 4] = [
        ChangePeriod::Day,
        ChangePeriod::Week,
        ChangePeriod::TwoWeeks,
        ChangePeriod::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangePeriod::Day => "24h",
            ChangePeriod::Week => "7d",
            ChangePeriod::TwoWeeks => "2w",
            ChangePeriod::Month => "1m",
        }
    }

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "24h" => Some(ChangePeriod::Day),
            "7d" => Some(ChangePeriod::Week),
            "2w" => Some(ChangePeriod::TwoWeeks),
            "1m" => Some(ChangePeriod::Month),
            _ => None,
        }
    }
}

impl fmt::Display for ChangePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
