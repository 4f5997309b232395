//! Storage traits for the localized-entity engine.
//!
//! Persistence is an opaque collaborator: the services talk to these traits
//! and never to a concrete database. `bizdir-db` provides the PostgreSQL
//! implementations; [`memory`] provides the in-process backend used by the
//! test suites and the standalone demo mode.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DomainResult;
use crate::types::{DbId, Timestamp};

pub mod memory;

/// The language-independent row of a simple localized entity.
#[derive(Debug, Clone, Serialize)]
pub struct BaseRecord {
    pub id: DbId,
    /// The slug-like natural key (`CategoryLink`, `RoleStatusCode`, ...).
    pub identity: String,
    pub og_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A per-language name/description attached to exactly one base record.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRecord {
    pub id: DbId,
    pub parent_id: DbId,
    pub language_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a base record.
#[derive(Debug)]
pub struct NewBaseRecord<'a> {
    pub identity: &'a str,
    pub og_image: Option<&'a str>,
}

/// Insert payload for a translation record.
#[derive(Debug)]
pub struct NewTranslation<'a> {
    pub parent_id: DbId,
    pub language_id: DbId,
    pub name: &'a str,
    pub description: Option<&'a str>,
}

/// Persistence contract for one simple localized entity and its
/// translations. One store instance per entity table pair.
#[async_trait]
pub trait LocalizedStore: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<BaseRecord>>;
    async fn find_by_id(&self, id: DbId) -> DomainResult<Option<BaseRecord>>;
    async fn find_by_identity(&self, identity: &str) -> DomainResult<Option<BaseRecord>>;
    async fn insert(&self, new: NewBaseRecord<'_>) -> DomainResult<BaseRecord>;
    /// Persist the mutable fields of an existing record.
    async fn update(&self, record: &BaseRecord) -> DomainResult<BaseRecord>;
    /// Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> DomainResult<bool>;

    async fn translations_for(&self, parent_id: DbId) -> DomainResult<Vec<TranslationRecord>>;
    async fn find_translation(&self, id: DbId) -> DomainResult<Option<TranslationRecord>>;
    async fn find_translation_by_language(
        &self,
        parent_id: DbId,
        language_id: DbId,
    ) -> DomainResult<Option<TranslationRecord>>;
    async fn insert_translation(&self, new: NewTranslation<'_>)
        -> DomainResult<TranslationRecord>;
    async fn update_translation(
        &self,
        record: &TranslationRecord,
    ) -> DomainResult<TranslationRecord>;
    async fn delete_translation(&self, id: DbId) -> DomainResult<bool>;
}
