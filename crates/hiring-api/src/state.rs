//! Application state.

use std::sync::Arc;

use tracing::info;

use hiring_store::{
    DepartmentRepository, MemoryStore, PositionRepository, RecruiterRepository, SeedData,
    StoreResult,
};

use crate::auth::ApiKeyGate;
use crate::config::ApiConfig;
use crate::services::PositionService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub gate: Arc<ApiKeyGate>,
    pub departments: Arc<dyn DepartmentRepository>,
    pub recruiters: Arc<dyn RecruiterRepository>,
    pub positions: Arc<dyn PositionRepository>,
    pub position_service: PositionService,
}

impl AppState {
    /// Create new application state, seeding reference data from
    /// `SEED_FILE` when configured.
    pub fn new(config: ApiConfig) -> StoreResult<Self> {
        let seed = match &config.seed_file {
            Some(path) => SeedData::from_file(path)?,
            None => SeedData::defaults(),
        };

        info!(
            departments = seed.departments.len(),
            recruiters = seed.recruiters.len(),
            "Seeding in-memory store"
        );

        Ok(Self::with_store(config, Arc::new(MemoryStore::from_seed(seed))))
    }

    /// Build state over an existing store.
    pub fn with_store(config: ApiConfig, store: Arc<MemoryStore>) -> Self {
        let departments: Arc<dyn DepartmentRepository> = store.clone();
        let recruiters: Arc<dyn RecruiterRepository> = store.clone();
        let positions: Arc<dyn PositionRepository> = store;

        let gate = Arc::new(ApiKeyGate::new(
            config.api_key.clone(),
            config.auth_allowlist.as_slice(),
        ));
        let position_service = PositionService::new(
            Arc::clone(&positions),
            Arc::clone(&recruiters),
            Arc::clone(&departments),
        );

        Self {
            config,
            gate,
            departments,
            recruiters,
            positions,
            position_service,
        }
    }
}
