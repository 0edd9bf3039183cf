//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by operation, outcome
//! - `catalog_request_duration_seconds` (histogram): handler latency by operation
//! - `catalog_result_items` (histogram): items returned by operation
//! - `catalog_vehicles` (gauge): catalog size
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished request.
pub fn record_request(operation: &'static str, outcome: &'static str, start: Instant) {
    counter!("catalog_requests_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
    histogram!("catalog_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Record how many items a request returned.
pub fn record_result_items(operation: &'static str, items: usize) {
    histogram!("catalog_result_items", "operation" => operation).record(items as f64);
}

/// Record the catalog size.
pub fn record_catalog_size(vehicles: usize) {
    gauge!("catalog_vehicles").set(vehicles as f64);
}
