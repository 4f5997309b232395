//! In-process storage backend.
//!
//! Backs the integration test suites and the demo mode, so the whole engine
//! can run without PostgreSQL. Same write-time invariants as the real
//! backend: none -- uniqueness lives in the service layer, which is exactly
//! what the tests need to exercise.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::employee::{EmployeeRecord, EmployeeStore, NewEmployee};
use crate::error::{DomainError, DomainResult};
use crate::store::{
    BaseRecord, LocalizedStore, NewBaseRecord, NewTranslation, TranslationRecord,
};
use crate::types::{DbId, Timestamp};

fn now() -> Timestamp {
    chrono::Utc::now()
}

#[derive(Default)]
struct Tables {
    next_base_id: DbId,
    next_translation_id: DbId,
    bases: BTreeMap<DbId, BaseRecord>,
    translations: BTreeMap<DbId, TranslationRecord>,
}

/// In-memory [`LocalizedStore`] for one entity.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalizedStore for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<BaseRecord>> {
        Ok(self.inner.lock().unwrap().bases.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> DomainResult<Option<BaseRecord>> {
        Ok(self.inner.lock().unwrap().bases.get(&id).cloned())
    }

    async fn find_by_identity(&self, identity: &str) -> DomainResult<Option<BaseRecord>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .bases
            .values()
            .find(|r| r.identity == identity)
            .cloned())
    }

    async fn insert(&self, new: NewBaseRecord<'_>) -> DomainResult<BaseRecord> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_base_id += 1;
        let record = BaseRecord {
            id: inner.next_base_id,
            identity: new.identity.to_string(),
            og_image: new.og_image.map(str::to_string),
            created_at: now(),
            updated_at: now(),
        };
        inner.bases.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &BaseRecord) -> DomainResult<BaseRecord> {
        let mut inner = self.inner.lock().unwrap();
        let stored = inner
            .bases
            .get_mut(&record.id)
            .ok_or(DomainError::Unexpected(format!(
                "no row with id {} to update",
                record.id
            )))?;
        stored.identity = record.identity.clone();
        stored.og_image = record.og_image.clone();
        stored.updated_at = now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: DbId) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().bases.remove(&id).is_some())
    }

    async fn translations_for(&self, parent_id: DbId) -> DomainResult<Vec<TranslationRecord>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .translations
            .values()
            .filter(|t| t.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn find_translation(&self, id: DbId) -> DomainResult<Option<TranslationRecord>> {
        Ok(self.inner.lock().unwrap().translations.get(&id).cloned())
    }

    async fn find_translation_by_language(
        &self,
        parent_id: DbId,
        language_id: DbId,
    ) -> DomainResult<Option<TranslationRecord>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .translations
            .values()
            .find(|t| t.parent_id == parent_id && t.language_id == language_id)
            .cloned())
    }

    async fn insert_translation(
        &self,
        new: NewTranslation<'_>,
    ) -> DomainResult<TranslationRecord> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_translation_id += 1;
        let record = TranslationRecord {
            id: inner.next_translation_id,
            parent_id: new.parent_id,
            language_id: new.language_id,
            name: new.name.to_string(),
            description: new.description.map(str::to_string),
            created_at: now(),
            updated_at: now(),
        };
        inner.translations.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_translation(
        &self,
        record: &TranslationRecord,
    ) -> DomainResult<TranslationRecord> {
        let mut inner = self.inner.lock().unwrap();
        let stored =
            inner
                .translations
                .get_mut(&record.id)
                .ok_or(DomainError::Unexpected(format!(
                    "no translation with id {} to update",
                    record.id
                )))?;
        stored.name = record.name.clone();
        stored.description = record.description.clone();
        stored.updated_at = now();
        Ok(stored.clone())
    }

    async fn delete_translation(&self, id: DbId) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().translations.remove(&id).is_some())
    }
}

#[derive(Default)]
struct EmployeeTable {
    next_id: DbId,
    rows: BTreeMap<DbId, EmployeeRecord>,
}

/// In-memory [`EmployeeStore`].
#[derive(Default)]
pub struct MemoryEmployeeStore {
    inner: Mutex<EmployeeTable>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> DomainResult<Vec<EmployeeRecord>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> DomainResult<Option<EmployeeRecord>> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_by_link(&self, link: &str) -> DomainResult<Option<EmployeeRecord>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|r| r.link == link)
            .cloned())
    }

    async fn insert(&self, new: NewEmployee) -> DomainResult<EmployeeRecord> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let record = EmployeeRecord {
            id: inner.next_id,
            link: new.link,
            language_id: new.language_id,
            category_id: new.category_id,
            job_title_id: new.job_title_id,
            active: new.active,
            name: new.name,
            description: new.description,
            linkedin: new.linkedin,
            instagram: new.instagram,
            facebook: new.facebook,
            twitter: new.twitter,
            og_image: None,
            created_at: now(),
            updated_at: now(),
        };
        inner.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &EmployeeRecord) -> DomainResult<EmployeeRecord> {
        let mut inner = self.inner.lock().unwrap();
        let stored = inner
            .rows
            .get_mut(&record.id)
            .ok_or(DomainError::Unexpected(format!(
                "no employee with id {} to update",
                record.id
            )))?;
        *stored = EmployeeRecord {
            created_at: stored.created_at,
            updated_at: now(),
            ..record.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: DbId) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }
}
