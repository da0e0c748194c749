use rust_decimal::Decimal;

use crate::models::{ChangePeriod, TierBucket, Wallet};

/// Balance-weighted average percentage change for one period.
///
/// A wallet reporting exactly zero change carries no signal for the
/// period: it is excluded from the denominator, not just zero-weighted.
/// The weighted base can therefore differ from the tier's total balance.
pub fn weighted_change(wallets: &[Wallet], period: ChangePeriod) -> Decimal {
    let mut weighted_sum = Decimal::ZERO;
    let mut weighted_base = Decimal::ZERO;

    for wallet in wallets {
        let change = wallet.change(period);
        weighted_sum += change * wallet.balance;
        if !change.is_zero() {
            weighted_base += wallet.balance;
        }
    }

    if weighted_base > Decimal::ZERO {
        weighted_sum / weighted_base
    } else {
        Decimal::ZERO
    }
}

/// Plain sum of balances over every wallet in the tier, zero-change
/// wallets included.
pub fn total_balance(wallets: &[Wallet]) -> Decimal {
    wallets.iter().map(|w| w.balance).sum()
}

/// Assemble a tier bucket: total balance plus the weighted change for
/// every observation period.
pub fn build_bucket(wallets: Vec<Wallet>) -> TierBucket {
    let total_balance = total_balance(&wallets);
    let changes = ChangePeriod::ALL
        .iter()
        .map(|&p| (p, weighted_change(&wallets, p)))
        .collect();

    TierBucket {
        wallets,
        total_balance,
        changes,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_wallet(balance: Decimal, changes: &[(ChangePeriod, Decimal)]) -> Wallet {
        Wallet {
            address: format!("0x{balance}"),
            label: "test".into(),
            chain: "ethereum".into(),
            balance,
            is_exchange: false,
            is_active: 1,
            changes: changes.iter().copied().collect(),
        }
    }

    #[test]
    fn test_weighted_average() {
        // (100*10 + 300*-5) / (100+300) = -500/400 = -1.25
        let wallets = vec![
            make_wallet(dec!(100), &[(ChangePeriod::Day, dec!(10))]),
            make_wallet(dec!(300), &[(ChangePeriod::Day, dec!(-5))]),
        ];

        assert_eq!(weighted_change(&wallets, ChangePeriod::Day), dec!(-1.25));
    }

    #[test]
    fn test_zero_change_excluded_from_base() {
        // The 400-balance wallet reports 0% for 24h: it still counts toward
        // the total but not toward the weighted base, so the result is the
        // 100-balance wallet's change unchanged.
        let wallets = vec![
            make_wallet(dec!(100), &[(ChangePeriod::Day, dec!(8))]),
            make_wallet(dec!(400), &[(ChangePeriod::Day, dec!(0))]),
        ];

        assert_eq!(weighted_change(&wallets, ChangePeriod::Day), dec!(8));
        assert_eq!(total_balance(&wallets), dec!(500));
    }

    #[test]
    fn test_missing_period_reads_as_zero() {
        let wallets = vec![
            make_wallet(dec!(100), &[(ChangePeriod::Day, dec!(4))]),
            make_wallet(dec!(900), &[]),
        ];

        // Only the reporting wallet enters the denominator.
        assert_eq!(weighted_change(&wallets, ChangePeriod::Day), dec!(4));
        assert_eq!(weighted_change(&wallets, ChangePeriod::Week), Decimal::ZERO);
    }

    #[test]
    fn test_empty_bucket_is_stable() {
        let bucket = build_bucket(Vec::new());
        assert_eq!(bucket.total_balance, Decimal::ZERO);
        assert_eq!(bucket.changes.len(), ChangePeriod::ALL.len());
        for (_, change) in &bucket.changes {
            assert_eq!(*change, Decimal::ZERO);
        }
    }

    #[test]
    fn test_build_bucket_covers_all_periods() {
        let wallets = vec![make_wallet(dec!(50), &[(ChangePeriod::Month, dec!(2))])];
        let bucket = build_bucket(wallets);

        let keys: Vec<ChangePeriod> = bucket.changes.keys().copied().collect();
        assert_eq!(keys, ChangePeriod::ALL.to_vec());
        assert_eq!(bucket.changes[&ChangePeriod::Month], dec!(2));
        assert_eq!(bucket.changes[&ChangePeriod::Day], Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let wallets = vec![
            make_wallet(dec!(100), &[(ChangePeriod::Day, dec!(10))]),
            make_wallet(dec!(300), &[(ChangePeriod::Day, dec!(-5))]),
        ];

        let first = build_bucket(wallets.clone());
        let second = build_bucket(wallets);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_zero_changes_fall_back_to_zero() {
        let wallets = vec![
            make_wallet(dec!(100), &[(ChangePeriod::Day, dec!(0))]),
            make_wallet(dec!(200), &[]),
        ];

        assert_eq!(weighted_change(&wallets, ChangePeriod::Day), Decimal::ZERO);
    }
}
