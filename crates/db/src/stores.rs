//! Adapters implementing the `bizdir-core` store and directory traits on
//! top of the repositories.
//!
//! Storage failures are logged here and wrapped into
//! `DomainError::Unexpected` with the cause preserved; the services treat
//! them as server faults.

use async_trait::async_trait;

use bizdir_core::catalog::EntityDescriptor;
use bizdir_core::directory::{Language, LanguageDirectory};
use bizdir_core::employee::{EmployeeRecord, EmployeeStore, NewEmployee};
use bizdir_core::error::{DomainError, DomainResult};
use bizdir_core::store::{
    BaseRecord, LocalizedStore, NewBaseRecord, NewTranslation, TranslationRecord,
};
use bizdir_core::types::DbId;

use crate::repositories::{EmployeeRepo, LanguageRepo, LocalizedRepo};
use crate::tables::tables_for;
use crate::DbPool;

fn storage(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "database error");
    DomainError::Unexpected(err.to_string())
}

/// PostgreSQL-backed [`LocalizedStore`] for one catalog entity.
pub struct PgLocalizedStore {
    pool: DbPool,
    repo: LocalizedRepo,
}

impl PgLocalizedStore {
    pub fn new(pool: DbPool, desc: &'static EntityDescriptor) -> Self {
        Self {
            pool,
            repo: LocalizedRepo::new(tables_for(desc)),
        }
    }
}

#[async_trait]
impl LocalizedStore for PgLocalizedStore {
    async fn list(&self) -> DomainResult<Vec<BaseRecord>> {
        let rows = self.repo.list(&self.pool).await.map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: DbId) -> DomainResult<Option<BaseRecord>> {
        let row = self.repo.find_by_id(&self.pool, id).await.map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_identity(&self, identity: &str) -> DomainResult<Option<BaseRecord>> {
        let row = self
            .repo
            .find_by_identity(&self.pool, identity)
            .await
            .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, new: NewBaseRecord<'_>) -> DomainResult<BaseRecord> {
        let row = self
            .repo
            .insert(&self.pool, new.identity, new.og_image)
            .await
            .map_err(storage)?;
        Ok(row.into())
    }

    async fn update(&self, record: &BaseRecord) -> DomainResult<BaseRecord> {
        let row = self
            .repo
            .update(
                &self.pool,
                record.id,
                &record.identity,
                record.og_image.as_deref(),
            )
            .await
            .map_err(storage)?;
        row.map(Into::into).ok_or(DomainError::Unexpected(format!(
            "no row with id {} to update",
            record.id
        )))
    }

    async fn delete(&self, id: DbId) -> DomainResult<bool> {
        self.repo.delete(&self.pool, id).await.map_err(storage)
    }

    async fn translations_for(&self, parent_id: DbId) -> DomainResult<Vec<TranslationRecord>> {
        let rows = self
            .repo
            .translations_for(&self.pool, parent_id)
            .await
            .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_translation(&self, id: DbId) -> DomainResult<Option<TranslationRecord>> {
        let row = self
            .repo
            .find_translation(&self.pool, id)
            .await
            .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn find_translation_by_language(
        &self,
        parent_id: DbId,
        language_id: DbId,
    ) -> DomainResult<Option<TranslationRecord>> {
        let row = self
            .repo
            .find_translation_by_language(&self.pool, parent_id, language_id)
            .await
            .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn insert_translation(
        &self,
        new: NewTranslation<'_>,
    ) -> DomainResult<TranslationRecord> {
        let row = self
            .repo
            .insert_translation(
                &self.pool,
                new.parent_id,
                new.language_id,
                new.name,
                new.description,
            )
            .await
            .map_err(storage)?;
        Ok(row.into())
    }

    async fn update_translation(
        &self,
        record: &TranslationRecord,
    ) -> DomainResult<TranslationRecord> {
        let row = self
            .repo
            .update_translation(
                &self.pool,
                record.id,
                &record.name,
                record.description.as_deref(),
            )
            .await
            .map_err(storage)?;
        row.map(Into::into).ok_or(DomainError::Unexpected(format!(
            "no translation with id {} to update",
            record.id
        )))
    }

    async fn delete_translation(&self, id: DbId) -> DomainResult<bool> {
        self.repo
            .delete_translation(&self.pool, id)
            .await
            .map_err(storage)
    }
}

/// PostgreSQL-backed [`EmployeeStore`].
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list(&self) -> DomainResult<Vec<EmployeeRecord>> {
        let rows = EmployeeRepo::list(&self.pool).await.map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: DbId) -> DomainResult<Option<EmployeeRecord>> {
        let row = EmployeeRepo::find_by_id(&self.pool, id).await.map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_link(&self, link: &str) -> DomainResult<Option<EmployeeRecord>> {
        let row = EmployeeRepo::find_by_link(&self.pool, link)
            .await
            .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, new: NewEmployee) -> DomainResult<EmployeeRecord> {
        let row = EmployeeRepo::insert(&self.pool, &new).await.map_err(storage)?;
        Ok(row.into())
    }

    async fn update(&self, record: &EmployeeRecord) -> DomainResult<EmployeeRecord> {
        let row = EmployeeRepo::update(&self.pool, record)
            .await
            .map_err(storage)?;
        row.map(Into::into).ok_or(DomainError::Unexpected(format!(
            "no employee with id {} to update",
            record.id
        )))
    }

    async fn delete(&self, id: DbId) -> DomainResult<bool> {
        EmployeeRepo::delete(&self.pool, id).await.map_err(storage)
    }
}

/// PostgreSQL-backed [`LanguageDirectory`].
pub struct PgLanguageDirectory {
    pool: DbPool,
}

impl PgLanguageDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageDirectory for PgLanguageDirectory {
    async fn get(&self, id: DbId) -> DomainResult<Language> {
        let row = LanguageRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage)?;
        row.map(Into::into).ok_or(DomainError::NotFound {
            entity: "Language",
            id,
        })
    }
}
