//! Prometheus metrics for the gateway.
//!
//! The exporter is optional; when `http.metrics_port` is unset the `metrics`
//! macros record into a no-op recorder.

use metrics::{counter, histogram, Counter, Histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Start the Prometheus exporter on the given port.
///
/// Metrics become available at `http://0.0.0.0:{port}/metrics`.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}

/// Metric handles for the price-aggregation pipeline.
///
/// # Metrics
///
/// * `gateway_requests_total` - Price requests served, labelled by endpoint
/// * `gateway_auth_denied_total` - Requests rejected by the API-key check
/// * `gateway_fetch_attempts_total` - Upstream ticker calls issued
/// * `gateway_fetch_failures_total` - Upstream ticker calls that failed
/// * `gateway_fetch_duration_seconds` - Wall time of one symbol fetch (retries included)
#[derive(Clone)]
pub struct GatewayMetrics {
    requests: fn(&'static str) -> Counter,
    auth_denied: Counter,
    fetch_attempts: Counter,
    fetch_failures: Counter,
    fetch_duration: Histogram,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self {
            requests: |endpoint| counter!("gateway_requests_total", "endpoint" => endpoint),
            auth_denied: counter!("gateway_auth_denied_total"),
            fetch_attempts: counter!("gateway_fetch_attempts_total"),
            fetch_failures: counter!("gateway_fetch_failures_total"),
            fetch_duration: histogram!("gateway_fetch_duration_seconds"),
        }
    }

    pub fn record_request(&self, endpoint: &'static str) {
        (self.requests)(endpoint).increment(1);
    }

    pub fn record_auth_denied(&self) {
        self.auth_denied.increment(1);
    }

    pub fn record_fetch_attempt(&self) {
        self.fetch_attempts.increment(1);
    }

    pub fn record_fetch_failure(&self) {
        self.fetch_failures.increment(1);
    }

    pub fn record_fetch_duration(&self, duration: Duration) {
        self.fetch_duration.record(duration.as_secs_f64());
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
