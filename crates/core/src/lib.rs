//! Core domain logic for the localized business-directory backend.
//!
//! Every simple entity (categories, countries, job titles, ...) shares one
//! record shape and one service implementation, parameterized by a static
//! [`catalog::EntityDescriptor`]. Persistence and the language/category
//! collaborators are traits, implemented by `bizdir-db` for PostgreSQL and
//! by [`store::memory`] for tests and demo mode.

pub mod catalog;
pub mod directory;
pub mod employee;
pub mod error;
pub mod format;
pub mod payload;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;
