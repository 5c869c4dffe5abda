//! API routes.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::auth::api_key_middleware;
use crate::handlers::{
    create_position, delete_position, get_api_docs, get_department, get_position, get_recruiter,
    health, list_departments, list_positions, list_recruiters, ready, update_position,
};
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let position_routes = Router::new()
        .route("/positions", get(list_positions).post(create_position))
        .route(
            "/positions/:id",
            get(get_position).put(update_position).delete(delete_position),
        );

    let reference_routes = Router::new()
        .route("/departments", get(list_departments))
        .route("/departments/:id", get(get_department))
        .route("/recruiters", get(list_recruiters))
        .route("/recruiters/:id", get(get_recruiter));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    let docs_routes = Router::new().route("/v3/api-docs", get(get_api_docs));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    // The key check covers every route; allow-listed paths pass through it.
    Router::new()
        .nest("/api", position_routes.merge(reference_routes))
        .merge(health_routes)
        .merge(docs_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn_with_state(
            state.gate.clone(),
            api_key_middleware,
        ))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(TimeoutLayer::new(state.config.request_timeout))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        // Outermost so preflight requests are answered before the key check
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
