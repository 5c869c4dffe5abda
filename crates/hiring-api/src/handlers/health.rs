//! Liveness and readiness probes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// Liveness: the process is up and serving.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Readiness: the position store answers a count.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.positions.count().await {
        Ok(positions) => (
            StatusCode::OK,
            Json(json!({ "status": "ready", "positions": positions })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded", "error": e.to_string() })),
        ),
    }
}
