use std::time::Duration;

use tierscope::api::router::create_router;
use tierscope::config::AppConfig;
use tierscope::metrics::init_metrics;
use tierscope::upstream::UpstreamClient;
use tierscope::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = init_metrics();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()?;
    let upstream = UpstreamClient::new(http, config.upstream_base_url.clone());
    tracing::info!(upstream = %config.upstream_base_url, "Upstream client ready");

    let auth_enabled = config.auth_enabled();
    let state = AppState {
        config,
        upstream,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(auth = auth_enabled, "Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
