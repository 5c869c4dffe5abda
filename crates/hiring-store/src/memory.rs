//! In-memory store implementing every repository.
//!
//! Each table sits behind its own `RwLock`, so work on one table never
//! waits on another and a write holds the lock for the whole mutation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use hiring_models::{
    Department, DepartmentId, Page, PageRequest, Position, PositionId, Recruiter, RecruiterId,
};

use crate::error::StoreResult;
use crate::metrics::{record_operation, tables};
use crate::repos::{DepartmentRepository, PositionRepository, RecruiterRepository};
use crate::seed::SeedData;
use crate::sorting::sort_and_slice;

/// Position rows plus the id sequence.
#[derive(Debug)]
struct PositionTable {
    rows: BTreeMap<PositionId, Position>,
    next_id: PositionId,
}

impl Default for PositionTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Store holding all three tables in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    departments: RwLock<BTreeMap<DepartmentId, Department>>,
    recruiters: RwLock<BTreeMap<RecruiterId, Recruiter>>,
    positions: RwLock<PositionTable>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with reference data.
    ///
    /// Ids start at 1 and follow the order of the seed rows.
    pub fn from_seed(seed: SeedData) -> Self {
        let departments = seed
            .departments
            .into_iter()
            .zip(1..)
            .map(|(d, id)| (id, Department::new(id, d.name, d.code)))
            .collect::<BTreeMap<_, _>>();
        let recruiters = seed
            .recruiters
            .into_iter()
            .zip(1..)
            .map(|(r, id)| (id, Recruiter::new(id, r.name, r.email)))
            .collect::<BTreeMap<_, _>>();

        info!(
            departments = departments.len(),
            recruiters = recruiters.len(),
            "Seeded reference data"
        );

        Self {
            departments: RwLock::new(departments),
            recruiters: RwLock::new(recruiters),
            positions: RwLock::new(PositionTable::default()),
        }
    }
}

#[async_trait]
impl DepartmentRepository for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Department>> {
        record_operation("find_all", tables::DEPARTMENTS);
        Ok(self.departments.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DepartmentId) -> StoreResult<Option<Department>> {
        record_operation("find_by_id", tables::DEPARTMENTS);
        Ok(self.departments.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl RecruiterRepository for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Recruiter>> {
        record_operation("find_all", tables::RECRUITERS);
        Ok(self.recruiters.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: RecruiterId) -> StoreResult<Option<Recruiter>> {
        record_operation("find_by_id", tables::RECRUITERS);
        Ok(self.recruiters.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl PositionRepository for MemoryStore {
    async fn find_page(&self, request: &PageRequest) -> StoreResult<Page<Position>> {
        record_operation("find_page", tables::POSITIONS);
        let table = self.positions.read().await;
        let total = table.rows.len() as u64;
        let all: Vec<Position> = table.rows.values().cloned().collect();
        drop(table);

        let content = sort_and_slice(all, request);
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: PositionId) -> StoreResult<Option<Position>> {
        record_operation("find_by_id", tables::POSITIONS);
        Ok(self.positions.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: PositionId) -> StoreResult<bool> {
        record_operation("exists_by_id", tables::POSITIONS);
        Ok(self.positions.read().await.rows.contains_key(&id))
    }

    async fn save(&self, mut position: Position) -> StoreResult<Position> {
        record_operation("save", tables::POSITIONS);
        let mut table = self.positions.write().await;

        let id = table.next_id;
        table.next_id += 1;
        position.id = Some(id);

        table.rows.insert(id, position.clone());
        debug!(position_id = id, "Inserted position");
        Ok(position)
    }

    async fn replace(&self, position: Position) -> StoreResult<Option<Position>> {
        record_operation("replace", tables::POSITIONS);
        let mut table = self.positions.write().await;

        let Some(slot) = position.id.and_then(|id| table.rows.get_mut(&id)) else {
            debug!(position_id = ?position.id, "Nothing to replace");
            return Ok(None);
        };
        *slot = position.clone();
        debug!(position_id = ?position.id, "Replaced position");
        Ok(Some(position))
    }

    async fn delete_by_id(&self, id: PositionId) -> StoreResult<bool> {
        record_operation("delete_by_id", tables::POSITIONS);
        let removed = self.positions.write().await.rows.remove(&id).is_some();
        debug!(position_id = id, removed, "Deleted position");
        Ok(removed)
    }

    async fn count(&self) -> StoreResult<u64> {
        record_operation("count", tables::POSITIONS);
        Ok(self.positions.read().await.rows.len() as u64)
    }
}
