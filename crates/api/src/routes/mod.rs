//! Route definitions.
//!
//! Route hierarchy under `/api/v1`:
//!
//! ```text
//! /{entity}                                list, create
//! /{entity}/{id}                           get (with translations), update, delete
//! /{entity}/{id}/localized/{language_id}   detail-formatted view
//! /{entity}/{id}/translations              create translation
//! /{entity}/{id}/translations/{tid}        update, delete translation
//! /{entity}/{id}/og-image                  upload OG image (PUT)
//!
//! /employees                               list, create
//! /employees/{id}                          get, update, delete
//! /employees/{id}/toggle-status            flip activity flag (POST)
//! /employees/{id}/og-image                 upload OG image (PUT)
//!
//! /admin/seed                              idempotent demo seeding (POST)
//! ```
//!
//! `{entity}` is a plural slug resolved against the service registry
//! (`categories`, `countries`, `employee-job-titles`, ...). The static
//! `/employees` and `/admin` prefixes take precedence over the dynamic
//! segment.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod employees;
pub mod entities;
pub mod health;

/// Build the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(employees::router())
        .merge(admin::router())
        .merge(entities::router())
}
