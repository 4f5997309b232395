//! Handlers for the `/employees` resource.
//!
//! Employees use typed DTOs rather than the dynamic payload maps of the
//! simple entities; `toggle-status` stays dynamic because its contract is
//! "this one field and nothing else".

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Value;

use bizdir_core::employee::{CreateEmployee, UpdateEmployee};
use bizdir_core::payload::FieldMap;
use bizdir_core::types::DbId;

use crate::error::AppResult;
use crate::handlers::image_extension;
use crate::state::AppState;

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    Ok(Json(state.employees.list().await?))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let envelope = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.employees.get_by_id(id).await?))
}

/// PUT /api/v1/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.employees.update(id, input).await?))
}

/// POST /api/v1/employees/{id}/toggle-status
pub async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(data): Json<FieldMap>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.employees.toggle_status(id, &data).await?))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.employees.delete(id).await?))
}

/// PUT /api/v1/employees/{id}/og-image
pub async fn set_og_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let extension = image_extension(&headers)?;
    Ok(Json(
        state
            .employees
            .set_og_image(id, state.og_images.as_ref(), &body, extension)
            .await?,
    ))
}
