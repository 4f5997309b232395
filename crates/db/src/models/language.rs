//! Language row.

use serde::Serialize;
use sqlx::FromRow;

use bizdir_core::directory::Language;
use bizdir_core::types::DbId;

/// A row from the `languages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LanguageRow {
    pub id: DbId,
    pub code: String,
    pub name: String,
}

impl From<LanguageRow> for Language {
    fn from(row: LanguageRow) -> Self {
        Language {
            id: row.id,
            code: row.code,
            name: row.name,
        }
    }
}
