use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_auth;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected API routes — require Bearer token when one is configured
    let protected = Router::new()
        // Classified tier table
        .route("/api/wallets/stats", get(handlers::stats::wallet_stats))
        // Per-wallet resampled series
        .route("/api/wallets/chart-data", get(handlers::chart::wallet_series))
        // Tier-totals series
        .route("/api/wallets/chart", get(handlers::chart::tier_chart))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // CORS: dashboard is served from another origin; direct access needs token
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
