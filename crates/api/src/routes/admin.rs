//! Administrative routes.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/seed", post(admin::seed))
}
