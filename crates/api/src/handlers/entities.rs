//! Generic handlers for the simple localized entities.
//!
//! The `{entity}` path segment is a plural slug resolved against the
//! service registry; everything else is delegated to the generic service.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Value;

use bizdir_core::payload::FieldMap;
use bizdir_core::service::LocalizedEntityService;
use bizdir_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::image_extension;
use crate::state::AppState;

fn service<'a>(state: &'a AppState, slug: &str) -> AppResult<&'a LocalizedEntityService> {
    state
        .registry
        .get(slug)
        .ok_or_else(|| AppError::UnknownResource(slug.to_string()))
}

/// GET /api/v1/{entity}
pub async fn list(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> AppResult<Json<Value>> {
    Ok(Json(service(&state, &entity)?.list().await?))
}

/// POST /api/v1/{entity}
pub async fn create(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Json(data): Json<FieldMap>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let envelope = service(&state, &entity)?.create(&data).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// GET /api/v1/{entity}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, DbId)>,
) -> AppResult<Json<Value>> {
    Ok(Json(service(&state, &entity)?.get_by_id(id).await?))
}

/// GET /api/v1/{entity}/{id}/localized/{language_id}
pub async fn get_localized(
    State(state): State<AppState>,
    Path((entity, id, language_id)): Path<(String, DbId, DbId)>,
) -> AppResult<Json<Value>> {
    Ok(Json(
        service(&state, &entity)?.get_localized(id, language_id).await?,
    ))
}

/// PUT /api/v1/{entity}/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, DbId)>,
    Json(data): Json<FieldMap>,
) -> AppResult<Json<Value>> {
    Ok(Json(service(&state, &entity)?.update(id, &data).await?))
}

/// DELETE /api/v1/{entity}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, DbId)>,
) -> AppResult<Json<Value>> {
    Ok(Json(service(&state, &entity)?.delete(id).await?))
}

/// POST /api/v1/{entity}/{id}/translations
pub async fn create_translation(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, DbId)>,
    Json(data): Json<FieldMap>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let envelope = service(&state, &entity)?
        .create_translation(id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// PUT /api/v1/{entity}/{id}/translations/{translation_id}
pub async fn update_translation(
    State(state): State<AppState>,
    Path((entity, id, translation_id)): Path<(String, DbId, DbId)>,
    Json(data): Json<FieldMap>,
) -> AppResult<Json<Value>> {
    Ok(Json(
        service(&state, &entity)?
            .update_translation(id, translation_id, &data)
            .await?,
    ))
}

/// DELETE /api/v1/{entity}/{id}/translations/{translation_id}
pub async fn delete_translation(
    State(state): State<AppState>,
    Path((entity, id, translation_id)): Path<(String, DbId, DbId)>,
) -> AppResult<Json<Value>> {
    Ok(Json(
        service(&state, &entity)?
            .delete_translation(id, translation_id)
            .await?,
    ))
}

/// PUT /api/v1/{entity}/{id}/og-image
///
/// Body is the raw image; the extension comes from the content type.
pub async fn set_og_image(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, DbId)>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let extension = image_extension(&headers)?;
    Ok(Json(
        service(&state, &entity)?
            .set_og_image(id, state.og_images.as_ref(), &body, extension)
            .await?,
    ))
}
