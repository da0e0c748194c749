use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // Pre-register counters so they appear even before the first increment.
    counter!("upstream_requests_total").absolute(0);
    counter!("upstream_request_failures_total").absolute(0);
    counter!("stats_requests_total").absolute(0);
    counter!("chart_requests_total").absolute(0);

    // Pre-register gauges at zero.
    gauge!("wallets_classified").set(0.0);

    // Histogram is lazily created on first record; force creation.
    histogram!("aggregation_seconds").record(0.0);

    handle
}
