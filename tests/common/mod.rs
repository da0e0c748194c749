use std::sync::OnceLock;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};

use tierscope::config::AppConfig;
use tierscope::upstream::UpstreamClient;
use tierscope::AppState;

static METRICS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Only one Prometheus recorder may exist per process; share it
/// across tests.
pub fn test_metrics_handle() -> PrometheusHandle {
    METRICS
        .get_or_init(tierscope::metrics::init_metrics)
        .clone()
}

/// Serve a canned upstream backend on an ephemeral port and return its
/// base URL.
pub async fn spawn_stub_upstream() -> String {
    let app = Router::new()
        .route("/wallets/stats", get(stub_stats))
        .route("/wallets/chart-data", get(stub_chart_data));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn stub_stats() -> Json<Value> {
    // Deliberately mixed numeric shapes: strings, numbers, 0/1 flags.
    Json(json!([
        {
            "address": "0xexchange",
            "label": "Binance",
            "chain": "ethereum",
            "balance": "2500000",
            "is_exchange": true,
            "is_active": 1,
            "changes": { "24h": 1.5, "7d": "-2.25" }
        },
        {
            "address": "0xwhale",
            "label": "whale-1",
            "chain": "ethereum",
            "balance": 1500000,
            "is_exchange": 0,
            "is_active": "1",
            "changes": { "24h": 10 }
        },
        {
            "address": "0xmedium",
            "label": "mid-1",
            "chain": "ethereum",
            "balance": 50000,
            "is_exchange": false,
            "changes": {}
        },
        {
            "address": "0xsmall",
            "label": "small-1",
            "chain": "ethereum",
            "balance": 12.5,
            "is_exchange": false,
            "is_active": 1,
            "changes": {}
        },
        {
            "address": "0xdormant",
            "label": "dormant",
            "chain": "ethereum",
            "balance": 9000000,
            "is_exchange": false,
            "is_active": 0,
            "changes": {}
        }
    ]))
}

async fn stub_chart_data() -> Json<Value> {
    let now_ms = Utc::now().timestamp_millis();
    let minute_ms: i64 = 60_000;

    Json(json!({
        "ethereum": [
            {
                "label": "whale-1",
                "is_exchange": false,
                "balances": [
                    { "timestamp": now_ms - 40 * 24 * 60 * minute_ms, "balance": 900000 },
                    { "timestamp": now_ms - 45 * minute_ms, "balance": 1200000 },
                    { "timestamp": now_ms - 2 * minute_ms, "balance": "1500000" }
                ]
            },
            {
                "label": "Binance",
                "is_exchange": true,
                "balances": [
                    { "timestamp": now_ms - 10 * minute_ms, "balance": 2500000 }
                ]
            }
        ]
    }))
}

pub async fn build_test_app(api_token: Option<&str>) -> Router {
    let base_url = spawn_stub_upstream().await;
    let metrics_handle = test_metrics_handle();

    let config = AppConfig {
        upstream_base_url: base_url.clone(),
        host: "127.0.0.1".into(),
        port: 0,
        upstream_timeout_secs: 5,
        api_token: api_token.map(str::to_string),
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let upstream = UpstreamClient::new(http, base_url);

    let state = AppState {
        config,
        upstream,
        metrics_handle,
    };

    tierscope::api::router::create_router(state)
}
