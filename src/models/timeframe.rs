use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart timeframe: a lookback window plus the resampling bucket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
}

const MINUTE_MS: i64 = 60 * 1_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::Hour,
        Timeframe::FourHours,
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Hour => "1h",
            Timeframe::FourHours => "4h",
            Timeframe::Day => "1d",
            Timeframe::Week => "1w",
            Timeframe::Month => "1m",
        }
    }

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "1h" => Some(Timeframe::Hour),
            "4h" => Some(Timeframe::FourHours),
            "1d" => Some(Timeframe::Day),
            "1w" => Some(Timeframe::Week),
            "1m" => Some(Timeframe::Month),
            _ => None,
        }
    }

    /// Lookback window in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match self {
            Timeframe::Hour => HOUR_MS,
            Timeframe::FourHours => 4 * HOUR_MS,
            Timeframe::Day => DAY_MS,
            Timeframe::Week => 7 * DAY_MS,
            Timeframe::Month => 30 * DAY_MS,
        }
    }

    /// Resampling bucket width in milliseconds.
    pub fn interval_ms(&self) -> i64 {
        match self {
            Timeframe::Hour => MINUTE_MS,
            Timeframe::FourHours => 5 * MINUTE_MS,
            Timeframe::Day => 30 * MINUTE_MS,
            Timeframe::Week => 4 * HOUR_MS,
            Timeframe::Month => DAY_MS,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
