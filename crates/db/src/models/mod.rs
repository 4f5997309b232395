//! Row types mapped with `sqlx::FromRow`, plus conversions into the
//! `bizdir-core` record types.

pub mod employee;
pub mod entity;
pub mod language;

pub use employee::EmployeeRow;
pub use entity::{EntityRow, TranslationRow};
pub use language::LanguageRow;
