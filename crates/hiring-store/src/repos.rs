//! Repository traits, one per entity.
//!
//! Each repository only knows its own table. Resolving a position's
//! recruiter and department is the caller's job.

use async_trait::async_trait;

use hiring_models::{
    Department, DepartmentId, Page, PageRequest, Position, PositionId, Recruiter, RecruiterId,
};

use crate::error::StoreResult;

/// Read-only access to departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// All departments ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Department>>;

    async fn find_by_id(&self, id: DepartmentId) -> StoreResult<Option<Department>>;
}

/// Read-only access to recruiters.
#[async_trait]
pub trait RecruiterRepository: Send + Sync {
    /// All recruiters ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Recruiter>>;

    async fn find_by_id(&self, id: RecruiterId) -> StoreResult<Option<Recruiter>>;
}

/// Storage for positions.
#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// One sorted page of positions with their references attached.
    async fn find_page(&self, request: &PageRequest) -> StoreResult<Page<Position>>;

    async fn find_by_id(&self, id: PositionId) -> StoreResult<Option<Position>>;

    async fn exists_by_id(&self, id: PositionId) -> StoreResult<bool>;

    /// Insert under the next free id. Any id already on `position` is
    /// overwritten. Returns the stored record.
    async fn save(&self, position: Position) -> StoreResult<Position>;

    /// Overwrite the record stored under `position.id`.
    ///
    /// The existence check and the write happen under one lock. Returns
    /// `None` without storing anything when no such record exists, so a
    /// record deleted in the meantime stays deleted.
    async fn replace(&self, position: Position) -> StoreResult<Option<Position>>;

    /// Returns `false` when nothing was stored under `id`.
    async fn delete_by_id(&self, id: PositionId) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;
}
