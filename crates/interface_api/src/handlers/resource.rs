//! CRUD handlers shared by every resource
//!
//! Each handler resolves the resource's logical database through the pool
//! registry and issues a single statement. Create payloads are validated
//! before the registry is touched, so a rejected request never opens a pool.
//! Malformed ids and bodies are rejected by the extractors in the same way.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use core_kernel::{require_fields, Resource};
use infra_db::{ResourceRepository, TableResource};

use crate::dto::DeletedResponse;
use crate::extract::{JsonBody, PathParam};
use crate::{error::ApiError, AppState};

fn repository<R: Resource>(state: &AppState) -> Result<ResourceRepository<R>, ApiError> {
    let pool = state.registry.get(R::DATABASE)?;
    Ok(ResourceRepository::new(pool))
}

/// Lists every row
pub async fn list<R: TableResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R>>, ApiError> {
    info!(table = R::TABLE, "List requested");
    let rows = repository::<R>(&state)?.list().await?;
    Ok(Json(rows))
}

/// Gets a row by id, wrapped in a one-element array
pub async fn get<R: TableResource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Vec<R>>, ApiError> {
    info!(table = R::TABLE, id, "Fetch requested");
    match repository::<R>(&state)?.find(id).await? {
        Some(row) => Ok(Json(vec![row])),
        None => Err(ApiError::NotFound(format!("{} {} not found", R::LABEL, id))),
    }
}

/// Creates a row; every writable field is required
pub async fn create<R: TableResource>(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<R::Fields>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    info!(table = R::TABLE, "Create requested");
    require_fields(&fields)?;

    let row = repository::<R>(&state)?.create(fields).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Partially updates a row; a body without fields returns the row unchanged
pub async fn update<R: TableResource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(fields): JsonBody<R::Fields>,
) -> Result<Json<R>, ApiError> {
    info!(table = R::TABLE, id, "Update requested");
    let row = repository::<R>(&state)?.update(id, fields).await?;
    Ok(Json(row))
}

/// Deletes a row
pub async fn delete<R: TableResource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<DeletedResponse>, ApiError> {
    info!(table = R::TABLE, id, "Delete requested");
    repository::<R>(&state)?.delete(id).await?;

    Ok(Json(DeletedResponse {
        message: format!("{} {} deleted", R::LABEL, id),
        id,
    }))
}
