//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): total requests by method, status,
//!   route
//! - `relay_request_duration_seconds` (histogram): latency distribution by
//!   method, route
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Locally answered errors count under their synthesized status
//! - Unrouted requests are labeled with route "none"

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged, not fatal; the relay serves traffic
/// without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route", route.to_string()),
    ];
    metrics::counter!("relay_requests_total", &labels).increment(1);

    let duration_labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
    ];
    metrics::histogram!("relay_request_duration_seconds", &duration_labels)
        .record(start.elapsed().as_secs_f64());
}
