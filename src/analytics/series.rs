use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{Tier, Timeframe, WalletSeries};

use super::resampler;
use super::thresholds::ThresholdSet;

/// Tier-totals chart: one summed series per tier, built from raw
/// per-wallet balance histories.
///
/// Each wallet is assigned a tier from its most recent observed balance
/// (exchange wallets go to `exchanges` unconditionally), its history is
/// windowed and resampled, and the resampled values are summed per
/// bucket within the tier. All five tiers are present in the output,
/// empty ones as empty series.
pub fn tier_series(
    series: &[WalletSeries],
    thresholds: &ThresholdSet,
    timeframe: Timeframe,
    now_ms: i64,
) -> BTreeMap<Tier, Vec<(i64, Decimal)>> {
    let mut per_tier: BTreeMap<Tier, BTreeMap<i64, Decimal>> = BTreeMap::new();
    for tier in Tier::ALL {
        per_tier.insert(tier, BTreeMap::new());
    }

    for wallet_series in series {
        let latest = wallet_series
            .balances
            .iter()
            .max_by_key(|p| p.timestamp)
            .map(|p| p.balance)
            .unwrap_or(Decimal::ZERO);

        let tier = if wallet_series.is_exchange {
            Tier::Exchanges
        } else {
            thresholds.tier_for(latest)
        };

        let windowed = resampler::window(&wallet_series.balances, timeframe.duration_ms(), now_ms);
        let resampled = resampler::resample(&windowed, timeframe.interval_ms());

        let acc = per_tier.entry(tier).or_default();
        for (bucket_start, balance) in resampled {
            *acc.entry(bucket_start).or_insert(Decimal::ZERO) += balance;
        }
    }

    per_tier
        .into_iter()
        .map(|(tier, buckets)| (tier, buckets.into_iter().collect()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::thresholds;
    use crate::models::BalancePoint;
    use rust_decimal_macros::dec;

    fn series(label: &str, is_exchange: bool, points: &[(i64, Decimal)]) -> WalletSeries {
        WalletSeries {
            label: label.into(),
            is_exchange,
            balances: points
                .iter()
                .map(|&(timestamp, balance)| BalancePoint { timestamp, balance })
                .collect(),
        }
    }

    #[test]
    fn test_all_tiers_present_even_when_empty() {
        let out = tier_series(&[], &thresholds::for_coin(1), Timeframe::Hour, 0);
        assert_eq!(out.len(), Tier::ALL.len());
        assert!(out.values().all(|s| s.is_empty()));
    }

    #[test]
    fn test_wallets_summed_within_tier() {
        let now = Timeframe::Hour.duration_ms();
        let interval = Timeframe::Hour.interval_ms();

        // Two whale-sized wallets (coin 1 profile) in the same bucket.
        let input = vec![
            series("w1", false, &[(interval, dec!(2000))]),
            series("w2", false, &[(interval + 1, dec!(3000))]),
        ];

        let out = tier_series(&input, &thresholds::for_coin(1), Timeframe::Hour, now);
        assert_eq!(out[&Tier::Whales], vec![(interval, dec!(5000))]);
    }

    #[test]
    fn test_exchange_series_bypass_thresholds() {
        let now = Timeframe::Hour.duration_ms();
        let input = vec![series("cex", true, &[(now, dec!(1))])];

        let out = tier_series(&input, &thresholds::for_coin(1), Timeframe::Hour, now);
        assert_eq!(out[&Tier::Exchanges].len(), 1);
        assert!(out[&Tier::Small].is_empty());
    }

    #[test]
    fn test_tier_from_latest_balance() {
        let now = Timeframe::Hour.duration_ms();
        // Started whale-sized, latest point is small: whole series charts
        // under small.
        let input = vec![series("shrunk", false, &[(now - 1, dec!(5000)), (now, dec!(1))])];

        let out = tier_series(&input, &thresholds::for_coin(1), Timeframe::Hour, now);
        assert!(out[&Tier::Whales].is_empty());
        assert!(!out[&Tier::Small].is_empty());
    }

    #[test]
    fn test_stale_points_windowed_out() {
        let now = 10 * Timeframe::Hour.duration_ms();
        let input = vec![series("w", false, &[(0, dec!(2000)), (now, dec!(2500))])];

        let out = tier_series(&input, &thresholds::for_coin(1), Timeframe::Hour, now);
        assert_eq!(out[&Tier::Whales].len(), 1);
    }
}
