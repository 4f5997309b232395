//! Repository for the simple localized entity table pairs.
//!
//! All nine entities share identical column layouts, so one repository
//! covers them, parameterized by the table names from
//! [`crate::tables::EntityTables`].

use sqlx::PgPool;

use bizdir_core::types::DbId;

use crate::models::{EntityRow, TranslationRow};
use crate::tables::EntityTables;

/// Column list shared across base-table queries to avoid repetition.
const BASE_COLUMNS: &str = "id, identity, og_image, created_at, updated_at";

/// Column list shared across translation-table queries.
const TRANSLATION_COLUMNS: &str =
    "id, parent_id, language_id, name, description, created_at, updated_at";

/// CRUD operations for one entity's base and translation tables.
pub struct LocalizedRepo {
    tables: &'static EntityTables,
}

impl LocalizedRepo {
    pub fn new(tables: &'static EntityTables) -> Self {
        Self { tables }
    }

    // -----------------------------------------------------------------------
    // Base records
    // -----------------------------------------------------------------------

    /// List all base records, oldest first.
    pub async fn list(&self, pool: &PgPool) -> Result<Vec<EntityRow>, sqlx::Error> {
        let query = format!(
            "SELECT {BASE_COLUMNS} FROM {} ORDER BY id",
            self.tables.base
        );
        sqlx::query_as::<_, EntityRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(
        &self,
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EntityRow>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS} FROM {} WHERE id = $1", self.tables.base);
        sqlx::query_as::<_, EntityRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_identity(
        &self,
        pool: &PgPool,
        identity: &str,
    ) -> Result<Option<EntityRow>, sqlx::Error> {
        let query = format!(
            "SELECT {BASE_COLUMNS} FROM {} WHERE identity = $1",
            self.tables.base
        );
        sqlx::query_as::<_, EntityRow>(&query)
            .bind(identity)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new base record, returning the created row.
    pub async fn insert(
        &self,
        pool: &PgPool,
        identity: &str,
        og_image: Option<&str>,
    ) -> Result<EntityRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (identity, og_image) VALUES ($1, $2) RETURNING {BASE_COLUMNS}",
            self.tables.base
        );
        sqlx::query_as::<_, EntityRow>(&query)
            .bind(identity)
            .bind(og_image)
            .fetch_one(pool)
            .await
    }

    /// Persist the mutable fields of an existing base record.
    pub async fn update(
        &self,
        pool: &PgPool,
        id: DbId,
        identity: &str,
        og_image: Option<&str>,
    ) -> Result<Option<EntityRow>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET identity = $2, og_image = $3, updated_at = NOW()
             WHERE id = $1 RETURNING {BASE_COLUMNS}",
            self.tables.base
        );
        sqlx::query_as::<_, EntityRow>(&query)
            .bind(id)
            .bind(identity)
            .bind(og_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a base record. Returns `true` if a row was removed.
    pub async fn delete(&self, pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.tables.base);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Translations
    // -----------------------------------------------------------------------

    pub async fn translations_for(
        &self,
        pool: &PgPool,
        parent_id: DbId,
    ) -> Result<Vec<TranslationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM {} WHERE parent_id = $1 ORDER BY id",
            self.tables.translations
        );
        sqlx::query_as::<_, TranslationRow>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_translation(
        &self,
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TranslationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM {} WHERE id = $1",
            self.tables.translations
        );
        sqlx::query_as::<_, TranslationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_translation_by_language(
        &self,
        pool: &PgPool,
        parent_id: DbId,
        language_id: DbId,
    ) -> Result<Option<TranslationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM {}
             WHERE parent_id = $1 AND language_id = $2",
            self.tables.translations
        );
        sqlx::query_as::<_, TranslationRow>(&query)
            .bind(parent_id)
            .bind(language_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert_translation(
        &self,
        pool: &PgPool,
        parent_id: DbId,
        language_id: DbId,
        name: &str,
        description: Option<&str>,
    ) -> Result<TranslationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (parent_id, language_id, name, description)
             VALUES ($1, $2, $3, $4) RETURNING {TRANSLATION_COLUMNS}",
            self.tables.translations
        );
        sqlx::query_as::<_, TranslationRow>(&query)
            .bind(parent_id)
            .bind(language_id)
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Persist name/description changes. `language_id` is immutable and is
    /// deliberately not part of the statement.
    pub async fn update_translation(
        &self,
        pool: &PgPool,
        id: DbId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<TranslationRow>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET name = $2, description = $3, updated_at = NOW()
             WHERE id = $1 RETURNING {TRANSLATION_COLUMNS}",
            self.tables.translations
        );
        sqlx::query_as::<_, TranslationRow>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_translation(&self, pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.tables.translations);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
