pub mod analytics;
pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod upstream;

use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub upstream: UpstreamClient,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
