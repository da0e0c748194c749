use crate::models::{Tier, Wallet, WalletTiers};

use super::aggregator;
use super::thresholds::{self, ThresholdSet};

/// Partition wallets into the five balance tiers for a coin.
///
/// Rules:
/// - wallets flagged `is_active == 0` are dropped before classification;
/// - exchange wallets always land in `exchanges`, whatever their balance;
/// - everything else is compared against the coin's thresholds in
///   descending order, boundary values going to the higher tier.
///
/// Input order is preserved within each tier.
pub fn classify(wallets: &[Wallet], coin_id: i64) -> WalletTiers {
    classify_with(wallets, &thresholds::for_coin(coin_id))
}

/// Same as [`classify`] with an explicit threshold set.
pub fn classify_with(wallets: &[Wallet], thresholds: &ThresholdSet) -> WalletTiers {
    let mut exchanges = Vec::new();
    let mut whales = Vec::new();
    let mut large = Vec::new();
    let mut medium = Vec::new();
    let mut small = Vec::new();

    for wallet in wallets {
        if wallet.is_active == 0 {
            continue;
        }
        if wallet.is_exchange {
            exchanges.push(wallet.clone());
            continue;
        }
        match thresholds.tier_for(wallet.balance) {
            Tier::Whales => whales.push(wallet.clone()),
            Tier::Large => large.push(wallet.clone()),
            Tier::Medium => medium.push(wallet.clone()),
            _ => small.push(wallet.clone()),
        }
    }

    WalletTiers {
        exchanges: aggregator::build_bucket(exchanges),
        whales: aggregator::build_bucket(whales),
        large: aggregator::build_bucket(large),
        medium: aggregator::build_bucket(medium),
        small: aggregator::build_bucket(small),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
