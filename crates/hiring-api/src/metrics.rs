//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "hiring_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "hiring_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "hiring_http_requests_in_flight";

    // Authentication
    pub const AUTH_REJECTIONS_TOTAL: &str = "hiring_auth_rejections_total";

    // Position lifecycle
    pub const POSITION_MUTATIONS_TOTAL: &str = "hiring_positions_mutations_total";
}

/// Label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Route template the request matched, e.g. `/api/positions/:id`.
///
/// Raw paths never become label values, so the series count is bounded by
/// the route table.
pub fn route_label<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, route: String, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", route),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a request turned away by the API-key gate.
pub fn record_auth_rejection(route: String) {
    counter!(names::AUTH_REJECTIONS_TOTAL, "path" => route).increment(1);
}

/// Record a successful create, update or delete.
pub fn record_position_mutation(operation: &'static str) {
    counter!(names::POSITION_MUTATIONS_TOTAL, "operation" => operation).increment(1);
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let route = route_label(&request);
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, route, status, duration);

    response
}
