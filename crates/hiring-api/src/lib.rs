//! Axum HTTP API server for positions.
//!
//! This crate provides:
//! - The position lifecycle service (validation, reference resolution, CRUD)
//! - Shared API-key authentication for every non allow-listed path
//! - Read-only department and recruiter endpoints
//! - Request logging, security headers and Prometheus metrics

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use auth::{check_api_key, ApiKeyGate, ApiPrincipal, AuthResult};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::PositionService;
pub use state::AppState;
