//! Generic routes for the simple localized entities.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::entities;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{entity}", get(entities::list).post(entities::create))
        .route(
            "/{entity}/{id}",
            get(entities::get_by_id)
                .put(entities::update)
                .delete(entities::delete),
        )
        .route(
            "/{entity}/{id}/localized/{language_id}",
            get(entities::get_localized),
        )
        .route(
            "/{entity}/{id}/translations",
            post(entities::create_translation),
        )
        .route(
            "/{entity}/{id}/translations/{translation_id}",
            put(entities::update_translation).delete(entities::delete_translation),
        )
        .route("/{entity}/{id}/og-image", put(entities::set_og_image))
}
