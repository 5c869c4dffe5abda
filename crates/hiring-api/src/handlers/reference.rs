//! Read-only department and recruiter handlers.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use hiring_models::{Department, DepartmentId, Recruiter, RecruiterId};

use crate::auth::ApiPrincipal;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub async fn list_departments(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
) -> ApiResult<Json<Vec<Department>>> {
    Ok(Json(state.departments.find_all().await?))
}

pub async fn get_department(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    id: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<Json<Department>> {
    let Path(id) = id?;
    state
        .departments
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Department not found with id: {}", id)))
}

pub async fn list_recruiters(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
) -> ApiResult<Json<Vec<Recruiter>>> {
    Ok(Json(state.recruiters.find_all().await?))
}

pub async fn get_recruiter(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    id: Result<Path<RecruiterId>, PathRejection>,
) -> ApiResult<Json<Recruiter>> {
    let Path(id) = id?;
    state
        .recruiters
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Recruiter not found with id: {}", id)))
}
