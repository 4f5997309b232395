//! Repository for the `languages` table.
//!
//! Languages are owned by an external module in the larger system; this
//! repository is the read-only view the directory adapter consumes.

use sqlx::PgPool;

use bizdir_core::types::DbId;

use crate::models::LanguageRow;

const COLUMNS: &str = "id, code, name";

/// Read operations for languages.
pub struct LanguageRepo;

impl LanguageRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<LanguageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM languages ORDER BY id");
        sqlx::query_as::<_, LanguageRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LanguageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM languages WHERE id = $1");
        sqlx::query_as::<_, LanguageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
