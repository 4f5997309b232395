//! Administrative handlers.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/admin/seed
///
/// Idempotent demo-data seeding across every entity, then the demo
/// employees. Per-item failures are logged and reported in the summary,
/// never propagated.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let summary = bizdir_core::seed::run(&state.registry, &state.employees).await;
    Ok(Json(summary))
}
