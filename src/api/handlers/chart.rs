use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use metrics::counter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{self, thresholds};
use crate::errors::AppError;
use crate::models::{Tier, Timeframe, WalletSeries};
use crate::AppState;

use super::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub coin_id: i64,
    pub timeframe: Option<String>,
}

/// One charted line: resampled `[bucket_start_ms, balance]` pairs.
#[derive(Debug, Serialize)]
pub struct WalletChartSeries {
    pub label: String,
    pub chain: String,
    pub is_exchange: bool,
    pub points: Vec<(i64, Decimal)>,
}

#[derive(Debug, Serialize)]
pub struct TierChartSeries {
    pub tier: Tier,
    pub points: Vec<(i64, Decimal)>,
}

/// Per-wallet balance series, windowed and resampled for the requested
/// timeframe.
pub async fn wallet_series(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ApiResponse<Vec<WalletChartSeries>>>, AppError> {
    counter!("chart_requests_total").increment(1);

    let timeframe = parse_timeframe(query.timeframe.as_deref())?;
    let raw = fetch_chart_data(&state, query.coin_id).await?;
    let now_ms = Utc::now().timestamp_millis();

    let mut out = Vec::new();
    for (chain, series_list) in raw {
        for raw_series in series_list {
            let series = raw_series.into_series();
            let windowed =
                analytics::window(&series.balances, timeframe.duration_ms(), now_ms);
            let points = analytics::resample(&windowed, timeframe.interval_ms());

            out.push(WalletChartSeries {
                label: series.label,
                chain: chain.clone(),
                is_exchange: series.is_exchange,
                points,
            });
        }
    }

    Ok(Json(ApiResponse::ok(out)))
}

/// Tier-totals chart for a coin: all five tiers, each wallet assigned
/// from its latest balance against the coin's thresholds.
pub async fn tier_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ApiResponse<Vec<TierChartSeries>>>, AppError> {
    counter!("chart_requests_total").increment(1);

    let timeframe = parse_timeframe(query.timeframe.as_deref())?;
    let raw = fetch_chart_data(&state, query.coin_id).await?;
    let now_ms = Utc::now().timestamp_millis();

    let series: Vec<WalletSeries> = raw
        .into_values()
        .flatten()
        .map(|s| s.into_series())
        .collect();

    let thresholds = thresholds::for_coin(query.coin_id);
    let per_tier = analytics::tier_series(&series, &thresholds, timeframe, now_ms);

    let out = per_tier
        .into_iter()
        .map(|(tier, points)| TierChartSeries { tier, points })
        .collect();

    Ok(Json(ApiResponse::ok(out)))
}

async fn fetch_chart_data(
    state: &AppState,
    coin_id: i64,
) -> Result<crate::upstream::types::RawChartData, AppError> {
    counter!("upstream_requests_total").increment(1);
    state
        .upstream
        .get_chart_data(coin_id)
        .await
        .inspect_err(|_| counter!("upstream_request_failures_total").increment(1))
        .map_err(AppError::from)
}

fn parse_timeframe(s: Option<&str>) -> Result<Timeframe, AppError> {
    match s {
        None => Ok(Timeframe::Day),
        Some(s) => Timeframe::from_api_str(s)
            .ok_or_else(|| AppError::BadRequest(format!("unknown timeframe: {s}"))),
    }
}
