//! HTTP surface of the directory backend.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! OG-image storage) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod storage;
