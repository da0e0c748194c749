//! Raw backend response shapes and their coercion into core models.
//!
//! The backend is loose with numeric fields: numbers, numeric strings,
//! nulls and missing keys all occur in the wild. Every coercion lives
//! here so the transforms downstream only ever see total, well-typed
//! values.

use std::collections::BTreeMap;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{BalancePoint, ChangePeriod, Wallet, WalletSeries};

/// Per-chain map of wallet balance histories, as returned by
/// `GET /wallets/chart-data`.
pub type RawChartData = BTreeMap<String, Vec<RawWalletSeries>>;

/// Wallet record as returned by `GET /wallets/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWallet {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub chain: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_exchange: bool,
    #[serde(default = "active_default", deserialize_with = "lenient_flag")]
    pub is_active: i64,
    #[serde(default)]
    pub changes: BTreeMap<String, Value>,
}

impl RawWallet {
    pub fn into_wallet(self) -> Wallet {
        let changes = self
            .changes
            .iter()
            .filter_map(|(period, value)| {
                ChangePeriod::from_api_str(period).map(|p| (p, decimal_or_zero(value)))
            })
            .collect();

        Wallet {
            address: self.address,
            label: self.label,
            chain: self.chain,
            balance: self.balance,
            is_exchange: self.is_exchange,
            is_active: self.is_active,
            changes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBalancePoint {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWalletSeries {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_exchange: bool,
    #[serde(default)]
    pub balances: Vec<RawBalancePoint>,
}

impl RawWalletSeries {
    pub fn into_series(self) -> WalletSeries {
        WalletSeries {
            label: self.label,
            is_exchange: self.is_exchange,
            balances: self
                .balances
                .into_iter()
                .map(|p| BalancePoint {
                    timestamp: p.timestamp,
                    balance: p.balance,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient coercion helpers
// ---------------------------------------------------------------------------

/// `parseFloat(x || 0)` equivalent: numbers pass through, numeric strings
/// parse, everything else reads as zero.
pub fn decimal_or_zero(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n
            .as_f64()
            .and_then(Decimal::from_f64)
            .unwrap_or(Decimal::ZERO),
        Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn active_default() -> i64 {
    1
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_or_zero(&value))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(i64_or_zero(&value))
}

/// Activity flag: any shape the backend sends, where only an explicit
/// zero means inactive. Nulls and garbage read as active.
fn lenient_flag<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Bool(b) => i64::from(*b),
        Value::Number(_) => i64_or_zero(&value),
        Value::String(s) => s.trim().parse().unwrap_or(1),
        _ => 1,
    })
}

fn i64_or_zero(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
