//! Position lifecycle service.
//!
//! Validates payloads, resolves recruiter and department references and
//! drives the position repository. Recruiters and departments are only
//! read here.

use std::sync::Arc;

use tracing::{debug, info};

use hiring_models::{
    Department, DepartmentId, Page, PageRequest, Position, PositionId, PositionPayload, Recruiter,
    RecruiterId, ValidPosition,
};
use hiring_store::{DepartmentRepository, PositionRepository, RecruiterRepository};

use crate::error::{ApiError, ApiResult};
use crate::metrics;

/// CRUD over positions with referential checks.
#[derive(Clone)]
pub struct PositionService {
    positions: Arc<dyn PositionRepository>,
    recruiters: Arc<dyn RecruiterRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl PositionService {
    /// Create a new position service.
    pub fn new(
        positions: Arc<dyn PositionRepository>,
        recruiters: Arc<dyn RecruiterRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            positions,
            recruiters,
            departments,
        }
    }

    /// One page of positions, recruiter and department attached.
    pub async fn list(&self, request: &PageRequest) -> ApiResult<Page<Position>> {
        debug!(
            page = request.page,
            size = request.size,
            sort = request.sort.field_name(),
            direction = request.direction.as_str(),
            "Listing positions"
        );
        Ok(self.positions.find_page(request).await?)
    }

    pub async fn get(&self, id: PositionId) -> ApiResult<Position> {
        self.positions
            .find_by_id(id)
            .await?
            .ok_or_else(|| position_not_found(id))
    }

    /// Validate, resolve references, then persist with a new id.
    pub async fn create(&self, payload: &PositionPayload) -> ApiResult<Position> {
        let valid = payload.validate()?;
        let (recruiter, department) = self.resolve_references(&valid).await?;

        let created = self
            .positions
            .save(Position::from_valid(valid, recruiter, department))
            .await?;

        info!(position_id = ?created.id, title = %created.title, "Created position");
        metrics::record_position_mutation("create");
        Ok(created)
    }

    /// Replace every mutable field of an existing position.
    ///
    /// A missing `id` is reported before the payload or its references are
    /// looked at. Any id inside the payload is ignored. A delete that lands
    /// after the first check still yields not found; the record is never
    /// written back.
    pub async fn update(&self, id: PositionId, payload: &PositionPayload) -> ApiResult<Position> {
        if !self.positions.exists_by_id(id).await? {
            return Err(position_not_found(id));
        }

        let valid = payload.validate()?;
        let (recruiter, department) = self.resolve_references(&valid).await?;

        let updated = self
            .positions
            .replace(Position::from_valid(valid, recruiter, department).with_id(id))
            .await?
            .ok_or_else(|| position_not_found(id))?;

        info!(position_id = id, "Updated position");
        metrics::record_position_mutation("update");
        Ok(updated)
    }

    pub async fn delete(&self, id: PositionId) -> ApiResult<()> {
        if !self.positions.exists_by_id(id).await? {
            return Err(position_not_found(id));
        }

        // A concurrent delete may have won since the check.
        if !self.positions.delete_by_id(id).await? {
            return Err(position_not_found(id));
        }

        info!(position_id = id, "Deleted position");
        metrics::record_position_mutation("delete");
        Ok(())
    }

    /// Recruiter first, then department: a payload with both wrong reports
    /// the recruiter.
    async fn resolve_references(&self, valid: &ValidPosition) -> ApiResult<(Recruiter, Department)> {
        let recruiter = self.resolve_recruiter(valid.recruiter_id).await?;
        let department = self.resolve_department(valid.department_id).await?;
        Ok((recruiter, department))
    }

    async fn resolve_recruiter(&self, id: RecruiterId) -> ApiResult<Recruiter> {
        self.recruiters
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Recruiter not found with id: {}", id)))
    }

    async fn resolve_department(&self, id: DepartmentId) -> ApiResult<Department> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Department not found with id: {}", id)))
    }
}

fn position_not_found(id: PositionId) -> ApiError {
    ApiError::not_found(format!("Position not found with id: {}", id))
}
