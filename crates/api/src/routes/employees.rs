//! Routes for the `/employees` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/{id}",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route(
            "/employees/{id}/toggle-status",
            post(employees::toggle_status),
        )
        .route("/employees/{id}/og-image", put(employees::set_og_image))
}
