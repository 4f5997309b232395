//! External collaborators consulted for existence and validation.
//!
//! Languages and (for employees) categories are owned outside the entity
//! services; they are reached through these traits. The OG-image store is
//! the third opaque boundary: services hand it bytes and get a path back.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::LANGUAGE_ID_FIELD;
use crate::error::{DomainError, DomainResult};
use crate::payload;
use crate::store::LocalizedStore;
use crate::types::DbId;

/// A resolved language row.
#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub id: DbId,
    pub code: String,
    pub name: String,
}

/// Language resolution service.
#[async_trait]
pub trait LanguageDirectory: Send + Sync {
    /// Fetch a language by id, failing with `NotFound` when absent.
    async fn get(&self, id: DbId) -> DomainResult<Language>;

    /// Validate a raw `LanguageID` payload value: must be present, an
    /// integer, and resolve to a real language.
    async fn validate(&self, value: Option<&Value>) -> DomainResult<DbId> {
        let id = payload::parse_id(LANGUAGE_ID_FIELD, value)?;
        self.require(id).await
    }

    /// Validate that an already-typed language id exists.
    async fn require(&self, id: DbId) -> DomainResult<DbId> {
        match self.get(id).await {
            Ok(_) => Ok(id),
            Err(DomainError::NotFound { .. }) => Err(DomainError::UnknownLanguage(format!(
                "no language with id {id}"
            ))),
            Err(other) => Err(other),
        }
    }
}

/// Category resolution service, consumed by the employee module.
#[async_trait]
pub trait CategoryDirectory: Send + Sync {
    /// Validate that a category id exists, returning it unchanged.
    async fn validate_exists(&self, id: DbId) -> DomainResult<DbId>;
}

/// Adapter exposing a category [`LocalizedStore`] as a [`CategoryDirectory`].
pub struct StoreCategoryDirectory {
    store: Arc<dyn LocalizedStore>,
}

impl StoreCategoryDirectory {
    pub fn new(store: Arc<dyn LocalizedStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryDirectory for StoreCategoryDirectory {
    async fn validate_exists(&self, id: DbId) -> DomainResult<DbId> {
        match self.store.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(DomainError::NotFound {
                entity: "Category",
                id,
            }),
        }
    }
}

/// Fixed language table, used by tests and the in-memory demo mode.
pub struct StaticLanguages {
    languages: Vec<Language>,
}

impl StaticLanguages {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// English (1), German (2), French (3) -- matching the rows the
    /// database migration seeds.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Language {
                id: 1,
                code: "en".into(),
                name: "English".into(),
            },
            Language {
                id: 2,
                code: "de".into(),
                name: "German".into(),
            },
            Language {
                id: 3,
                code: "fr".into(),
                name: "French".into(),
            },
        ])
    }
}

#[async_trait]
impl LanguageDirectory for StaticLanguages {
    async fn get(&self, id: DbId) -> DomainResult<Language> {
        self.languages
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(DomainError::NotFound {
                entity: "Language",
                id,
            })
    }
}

/// Opaque storage for OG images.
#[async_trait]
pub trait OgImageStore: Send + Sync {
    /// Persist `bytes` for the given owner and return the stored path.
    /// Replacing an existing image removes the old file best-effort.
    async fn store(
        &self,
        entity_slug: &str,
        owner_id: DbId,
        extension: &str,
        bytes: &[u8],
        old_path: Option<&str>,
    ) -> DomainResult<String>;
}
