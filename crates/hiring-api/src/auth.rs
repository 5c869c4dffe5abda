//! Shared API-key authentication.
//!
//! One secret guards every path that is not on the allow-list. The decision
//! itself is [`check_api_key`], a pure function of the configured gate, the
//! request headers and the path; [`api_key_middleware`] only adapts it to
//! axum.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::ApiError;
use crate::metrics;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Body of every 401, whether the key was absent or wrong.
pub const INVALID_API_KEY: &str = "Invalid API Key";

/// Paths reachable without a key unless `AUTH_ALLOWLIST` overrides them.
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "/swagger-ui.html",
    "/swagger-ui/**",
    "/v3/api-docs/**",
    "/h2-console/**",
    "/health",
    "/healthz",
    "/ready",
    "/metrics",
];

/// Allow-list entry.
///
/// `/docs/**` matches `/docs` and everything below it; any other pattern
/// must equal the path exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    Prefix(String),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

/// Configured secret plus allow-list. Immutable after startup.
#[derive(Clone)]
pub struct ApiKeyGate {
    api_key: String,
    allowlist: Vec<PathPattern>,
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("api_key", &"<redacted>")
            .field("allowlist", &self.allowlist)
            .finish()
    }
}

impl ApiKeyGate {
    pub fn new<S: AsRef<str>>(api_key: impl Into<String>, allowlist: &[S]) -> Self {
        Self {
            api_key: api_key.into(),
            allowlist: allowlist
                .iter()
                .map(|p| PathPattern::parse(p.as_ref()))
                .collect(),
        }
    }

    pub fn is_allowlisted(&self, path: &str) -> bool {
        self.allowlist.iter().any(|p| p.matches(path))
    }

    /// Byte-for-byte comparison. An unset secret never matches.
    fn accepts(&self, presented: &[u8]) -> bool {
        !self.api_key.is_empty() && presented == self.api_key.as_bytes()
    }
}

/// Capability granted to authenticated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Api,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Api => "ROLE_API",
        }
    }
}

/// Identity attached to a request that presented the right key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPrincipal {
    pub name: &'static str,
    pub role: Role,
}

impl ApiPrincipal {
    /// The single principal every valid key maps to.
    pub const API: ApiPrincipal = ApiPrincipal {
        name: "API",
        role: Role::Api,
    };
}

/// Verdict for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// Path is allow-listed; no check was made
    Bypassed,
    Authenticated(ApiPrincipal),
    /// Header absent or wrong
    Rejected,
}

/// Decide whether a request may proceed.
pub fn check_api_key(gate: &ApiKeyGate, headers: &HeaderMap, path: &str) -> AuthResult {
    if gate.is_allowlisted(path) {
        return AuthResult::Bypassed;
    }

    match headers.get(API_KEY_HEADER) {
        Some(value) if gate.accepts(value.as_bytes()) => {
            AuthResult::Authenticated(ApiPrincipal::API)
        }
        _ => AuthResult::Rejected,
    }
}

/// Middleware running [`check_api_key`] before any handler.
pub async fn api_key_middleware(
    State(gate): State<Arc<ApiKeyGate>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match check_api_key(&gate, request.headers(), request.uri().path()) {
        AuthResult::Bypassed => next.run(request).await,
        AuthResult::Authenticated(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        AuthResult::Rejected => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request with invalid API key"
            );
            metrics::record_auth_rejection(metrics::route_label(&request));
            ApiError::unauthorized(INVALID_API_KEY).into_response()
        }
    }
}

/// Axum extractor for the authenticated principal.
#[axum::async_trait]
impl<S> FromRequestParts<S> for ApiPrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiPrincipal>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized(INVALID_API_KEY))
    }
}
