use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ChangePeriod;

/// A single wallet balance snapshot as consumed by the classifier.
///
/// Produced from the upstream record by `upstream::types`; every numeric
/// field here is total (missing/malformed upstream values read as zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub label: String,
    pub chain: String,
    pub balance: Decimal,
    pub is_exchange: bool,
    /// Tri-state activity flag; wallets with value `0` are excluded
    /// from classification.
    pub is_active: i64,
    /// Signed percentage change per observation period.
    pub changes: BTreeMap<ChangePeriod, Decimal>,
}

impl Wallet {
    /// Reported change for a period; absent periods read as zero.
    pub fn change(&self, period: ChangePeriod) -> Decimal {
        self.changes.get(&period).copied().unwrap_or(Decimal::ZERO)
    }
}

/// One observed balance at an instant, epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub timestamp: i64,
    pub balance: Decimal,
}

/// Raw balance history for one wallet, as charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSeries {
    pub label: String,
    pub is_exchange: bool,
    pub balances: Vec<BalancePoint>,
}
