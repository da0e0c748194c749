use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use metrics::{counter, gauge, histogram};
use serde::Deserialize;

use crate::analytics;
use crate::errors::AppError;
use crate::models::{Wallet, WalletTiers};
use crate::upstream::types::RawWallet;
use crate::AppState;

use super::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub coin_id: i64,
    pub chain: Option<String>,
}

/// Classified tier table for a coin: five buckets with member wallets,
/// summed balances and weighted changes per period.
pub async fn wallet_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ApiResponse<WalletTiers>>, AppError> {
    counter!("stats_requests_total").increment(1);
    counter!("upstream_requests_total").increment(1);

    let raw = state
        .upstream
        .get_wallet_stats(query.coin_id, query.chain.as_deref())
        .await
        .inspect_err(|_| counter!("upstream_request_failures_total").increment(1))?;

    let wallets: Vec<Wallet> = raw.into_iter().map(RawWallet::into_wallet).collect();

    let started = Instant::now();
    let tiers = analytics::classify(&wallets, query.coin_id);
    histogram!("aggregation_seconds").record(started.elapsed().as_secs_f64());
    gauge!("wallets_classified").set(tiers.wallet_count() as f64);

    Ok(Json(ApiResponse::ok(tiers)))
}
