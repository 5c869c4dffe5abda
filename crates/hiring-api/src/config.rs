//! API configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::DEFAULT_ALLOWLIST;

/// API server configuration.
#[derive(Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Shared secret expected in the `X-API-KEY` header
    pub api_key: String,
    /// Path patterns that skip the API-key check
    pub auth_allowlist: Vec<String>,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max request body size
    pub max_body_size: usize,
    /// Optional JSON file with departments and recruiters
    pub seed_file: Option<PathBuf>,
    /// Serve Prometheus metrics at /metrics
    pub metrics_enabled: bool,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("auth_allowlist", &self.auth_allowlist)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout", &self.request_timeout)
            .field("max_body_size", &self.max_body_size)
            .field("seed_file", &self.seed_file)
            .field("metrics_enabled", &self.metrics_enabled)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_key: String::new(),
            auth_allowlist: default_allowlist(),
            cors_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            max_body_size: 1024 * 1024, // 1MB
            seed_file: None,
            metrics_enabled: true,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            api_key: std::env::var("API_KEY").unwrap_or_default(),
            auth_allowlist: std::env::var("AUTH_ALLOWLIST")
                .map(|s| split_list(&s))
                .unwrap_or_else(|_| default_allowlist()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| split_list(&s))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
            seed_file: std::env::var("SEED_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            metrics_enabled: std::env::var("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }
}

fn default_allowlist() -> Vec<String> {
    DEFAULT_ALLOWLIST.iter().map(|s| s.to_string()).collect()
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
