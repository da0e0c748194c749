use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::BalancePoint;

/// Drop points outside the lookback window `[now - duration, now]`.
pub fn window(points: &[BalancePoint], duration_ms: i64, now_ms: i64) -> Vec<BalancePoint> {
    let cutoff = now_ms - duration_ms;
    points
        .iter()
        .copied()
        .filter(|p| p.timestamp >= cutoff && p.timestamp <= now_ms)
        .collect()
}

/// Bucket points into fixed intervals, keeping the maximum balance seen
/// in each bucket.
///
/// Balance histories are recorded on transaction events and are sparse,
/// so the reducer keeps the local peak rather than the latest sample.
/// Output is ascending by bucket start regardless of input order.
pub fn resample(points: &[BalancePoint], interval_ms: i64) -> Vec<(i64, Decimal)> {
    if interval_ms <= 0 {
        return Vec::new();
    }

    let mut buckets: BTreeMap<i64, Decimal> = BTreeMap::new();
    for point in points {
        let bucket_start = point.timestamp.div_euclid(interval_ms) * interval_ms;
        buckets
            .entry(bucket_start)
            .and_modify(|max| {
                if point.balance > *max {
                    *max = point.balance;
                }
            })
            .or_insert(point.balance);
    }

    buckets.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
