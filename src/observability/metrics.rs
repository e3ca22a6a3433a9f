//! Metrics collection and exposition.
//!
//! # Metrics
//! - `address_book_requests_total` (counter): requests by method, route, status
//! - `address_book_request_duration_seconds` (histogram): latency by method, route
//! - `address_book_people` (gauge): current number of stored people
//!
//! Request metrics come from [`track_requests`], so responses produced before
//! a handler runs (body limit, timeout, unknown route) are counted too.
//! Recording is a no-op until a recorder is installed.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Middleware recording every request that reaches the router.
///
/// Routes are labelled by their pattern (`/contacts/person/{id}`), never by
/// the raw path, to keep label cardinality bounded.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(method, route, response.status().as_u16(), start);
    response
}

/// Record a completed request.
pub fn record_request(method: String, route: String, status: u16, start: Instant) {
    metrics::counter!(
        "address_book_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "address_book_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the current size of the address book.
pub fn record_people(count: usize) {
    metrics::gauge!("address_book_people").set(count as f64);
}
