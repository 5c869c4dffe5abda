//! Position CRUD handlers.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use hiring_models::{Page, PageRequest, Position, PositionId, PositionPayload};

use crate::auth::ApiPrincipal;
use crate::error::ApiResult;
use crate::state::AppState;

/// Query parameters for the position listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPositionsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

impl ListPositionsQuery {
    fn page_request(&self) -> ApiResult<PageRequest> {
        Ok(PageRequest::from_params(
            self.page,
            self.size,
            self.sort_by.as_deref(),
            self.direction.as_deref(),
        )?)
    }
}

/// List positions, one page at a time.
pub async fn list_positions(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    query: Result<Query<ListPositionsQuery>, QueryRejection>,
) -> ApiResult<Json<Page<Position>>> {
    let Query(query) = query?;
    let request = query.page_request()?;
    let page = state.position_service.list(&request).await?;
    Ok(Json(page))
}

pub async fn get_position(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    id: Result<Path<PositionId>, PathRejection>,
) -> ApiResult<Json<Position>> {
    let Path(id) = id?;
    Ok(Json(state.position_service.get(id).await?))
}

/// Create a position. Any `id` in the body is ignored.
pub async fn create_position(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    payload: Result<Json<PositionPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Position>)> {
    let Json(payload) = payload?;
    let created = state.position_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a position's fields.
pub async fn update_position(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    id: Result<Path<PositionId>, PathRejection>,
    payload: Result<Json<PositionPayload>, JsonRejection>,
) -> ApiResult<Json<Position>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    Ok(Json(state.position_service.update(id, &payload).await?))
}

pub async fn delete_position(
    State(state): State<AppState>,
    _principal: ApiPrincipal,
    id: Result<Path<PositionId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.position_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
