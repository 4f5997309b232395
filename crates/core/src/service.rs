//! The generic localized-entity service.
//!
//! One instance per business entity, parameterized by the entity's
//! [`EntityDescriptor`] and its store. All nine simple entities run through
//! this single implementation; only the employee module is a genuine
//! specialization.
//!
//! Every operation follows the same pipeline: existence gate, payload
//! whitelist, field validation, uniqueness check, persist, format. Any
//! failure aborts before persistence; validation-kind failures log at warn
//! and propagate unchanged for the HTTP layer to map to 4xx.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::catalog::{self, EntityDescriptor, LANGUAGE_ID_FIELD, OG_IMAGE_FIELD};
use crate::directory::{LanguageDirectory, OgImageStore};
use crate::error::{DomainError, DomainResult};
use crate::format;
use crate::payload::{self, FieldMap};
use crate::store::{BaseRecord, LocalizedStore, NewBaseRecord, NewTranslation, TranslationRecord};
use crate::types::DbId;
use crate::validate;

/// Build a `{<key>: <value>, message}` response envelope.
fn envelope(key: &str, value: Value, message: String) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map.insert("message".to_string(), Value::String(message));
    Value::Object(map)
}

/// CRUD + translation operations for one localized entity.
pub struct LocalizedEntityService {
    desc: &'static EntityDescriptor,
    store: Arc<dyn LocalizedStore>,
    languages: Arc<dyn LanguageDirectory>,
}

impl LocalizedEntityService {
    pub fn new(
        desc: &'static EntityDescriptor,
        store: Arc<dyn LocalizedStore>,
        languages: Arc<dyn LanguageDirectory>,
    ) -> Self {
        Self {
            desc,
            store,
            languages,
        }
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.desc
    }

    /// The underlying store. Used by seeding and by collaborator adapters
    /// (the category directory wraps the category store).
    pub fn store(&self) -> &Arc<dyn LocalizedStore> {
        &self.store
    }

    fn log_outcome<T>(&self, op: &'static str, result: &DomainResult<T>) {
        if let Err(err) = result {
            if err.is_client_fault() {
                tracing::warn!(entity = self.desc.entity, op, error = %err, "operation rejected");
            } else {
                tracing::error!(entity = self.desc.entity, op, error = %err, "operation failed");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Gates shared by every operation
    // -----------------------------------------------------------------------

    /// Fetch the base record or fail with `NotFound`.
    async fn require_exists(&self, id: DbId) -> DomainResult<BaseRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: self.desc.entity,
                id,
            })
    }

    /// Fetch a translation and verify it belongs to `parent`.
    async fn require_translation(
        &self,
        parent: &BaseRecord,
        translation_id: DbId,
    ) -> DomainResult<TranslationRecord> {
        self.store
            .find_translation(translation_id)
            .await?
            .filter(|t| t.parent_id == parent.id)
            .ok_or(DomainError::NotFound {
                entity: self.desc.translation_entity,
                id: translation_id,
            })
    }

    /// Reject empty identities and values already taken by another record.
    async fn ensure_unique_identity(
        &self,
        value: &str,
        exclude_id: Option<DbId>,
    ) -> DomainResult<()> {
        if value.is_empty() {
            return Err(DomainError::MissingField {
                field: self.desc.identity_field,
            });
        }
        if let Some(existing) = self.store.find_by_identity(value).await? {
            if Some(existing.id) != exclude_id {
                return Err(DomainError::Duplicate {
                    entity: self.desc.entity,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// At most one translation per (parent, language).
    async fn ensure_unique_translation(
        &self,
        parent: &BaseRecord,
        language_id: DbId,
    ) -> DomainResult<()> {
        if self
            .store
            .find_translation_by_language(parent.id, language_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateTranslation {
                entity: self.desc.entity,
                language_id,
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read operations
    // -----------------------------------------------------------------------

    pub async fn list(&self) -> DomainResult<Value> {
        let result = self.list_inner().await;
        self.log_outcome("list", &result);
        result
    }

    async fn list_inner(&self) -> DomainResult<Value> {
        let records = self.store.list().await?;
        let message = if records.is_empty() {
            format!("No {} found", self.desc.plural_label.to_lowercase())
        } else {
            format!("{} retrieved successfully", self.desc.plural_label)
        };
        let items: Vec<Value> = records.iter().map(|r| format::base(self.desc, r)).collect();
        Ok(envelope(self.desc.plural_key, Value::Array(items), message))
    }

    /// The base record plus all of its translations.
    pub async fn get_by_id(&self, id: DbId) -> DomainResult<Value> {
        let result = self.get_by_id_inner(id).await;
        self.log_outcome("get_by_id", &result);
        result
    }

    async fn get_by_id_inner(&self, id: DbId) -> DomainResult<Value> {
        let record = self.require_exists(id).await?;
        let translations = self.store.translations_for(record.id).await?;
        let mut map = Map::new();
        map.insert(
            self.desc.entity_key.to_string(),
            format::base(self.desc, &record),
        );
        map.insert(
            "translations".to_string(),
            Value::Array(
                translations
                    .iter()
                    .map(|t| format::translation(self.desc, t))
                    .collect(),
            ),
        );
        map.insert(
            "message".to_string(),
            Value::String(format!("{} retrieved successfully", self.desc.entity)),
        );
        Ok(Value::Object(map))
    }

    /// Detail projection for one language; resolution failures degrade into
    /// placeholders inside the formatter.
    pub async fn get_localized(&self, id: DbId, language_id: DbId) -> DomainResult<Value> {
        let result = self.get_localized_inner(id, language_id).await;
        self.log_outcome("get_localized", &result);
        result
    }

    async fn get_localized_inner(&self, id: DbId, language_id: DbId) -> DomainResult<Value> {
        let record = self.require_exists(id).await?;
        Ok(format::detail(
            self.desc,
            self.store.as_ref(),
            self.languages.as_ref(),
            &record,
            language_id,
        )
        .await)
    }

    // -----------------------------------------------------------------------
    // Base-record mutations
    // -----------------------------------------------------------------------

    pub async fn create(&self, data: &FieldMap) -> DomainResult<Value> {
        let result = self.create_inner(data).await;
        self.log_outcome("create", &result);
        result
    }

    async fn create_inner(&self, data: &FieldMap) -> DomainResult<Value> {
        payload::ensure_known_fields(data, &self.desc.base_fields())?;
        let identity = payload::require_str(data, self.desc.identity_field)?;
        validate::identity(self.desc.identity_field, identity)?;
        self.ensure_unique_identity(identity, None).await?;

        let og_image = if self.desc.has_og_image {
            payload::opt_str(data, OG_IMAGE_FIELD)?
        } else {
            None
        };

        let record = self
            .store
            .insert(NewBaseRecord { identity, og_image })
            .await?;
        Ok(envelope(
            self.desc.entity_key,
            format::base(self.desc, &record),
            format!("{} created successfully", self.desc.entity),
        ))
    }

    /// Update the natural key and whitelisted scalar fields.
    pub async fn update(&self, id: DbId, data: &FieldMap) -> DomainResult<Value> {
        let result = self.update_inner(id, data).await;
        self.log_outcome("update", &result);
        result
    }

    async fn update_inner(&self, id: DbId, data: &FieldMap) -> DomainResult<Value> {
        let mut record = self.require_exists(id).await?;
        payload::ensure_known_fields(data, &self.desc.base_fields())?;

        let new_identity =
            payload::update_if_present(data, self.desc.identity_field, |value| {
                validate::identity(self.desc.identity_field, value)
            })?;
        if let Some(value) = new_identity {
            self.ensure_unique_identity(value, Some(record.id)).await?;
            record.identity = value.to_string();
        }

        if self.desc.has_og_image {
            if let Some(path) = payload::opt_str(data, OG_IMAGE_FIELD)? {
                record.og_image = Some(path.to_string());
            }
        }

        let updated = self.store.update(&record).await?;
        Ok(envelope(
            self.desc.entity_key,
            format::base(self.desc, &updated),
            format!("{} updated successfully", self.desc.entity),
        ))
    }

    /// Delete the base record, removing all child translations first.
    /// Deletion order is the invariant; no storage-level cascade is assumed.
    pub async fn delete(&self, id: DbId) -> DomainResult<Value> {
        let result = self.delete_inner(id).await;
        self.log_outcome("delete", &result);
        result
    }

    async fn delete_inner(&self, id: DbId) -> DomainResult<Value> {
        let record = self.require_exists(id).await?;
        let translations = self.store.translations_for(record.id).await?;
        for t in &translations {
            self.store.delete_translation(t.id).await?;
        }
        if !self.store.delete(record.id).await? {
            return Err(DomainError::NotFound {
                entity: self.desc.entity,
                id,
            });
        }
        Ok(json!({
            "message": format!(
                "{} and {} translation(s) deleted successfully",
                self.desc.entity,
                translations.len()
            ),
        }))
    }

    /// Store a new OG image and persist its path on the record.
    pub async fn set_og_image(
        &self,
        id: DbId,
        images: &dyn OgImageStore,
        bytes: &[u8],
        extension: &str,
    ) -> DomainResult<Value> {
        let result = self.set_og_image_inner(id, images, bytes, extension).await;
        self.log_outcome("set_og_image", &result);
        result
    }

    async fn set_og_image_inner(
        &self,
        id: DbId,
        images: &dyn OgImageStore,
        bytes: &[u8],
        extension: &str,
    ) -> DomainResult<Value> {
        if !self.desc.has_og_image {
            return Err(DomainError::Validation(format!(
                "{} does not support OG images",
                self.desc.entity
            )));
        }
        let mut record = self.require_exists(id).await?;
        let path = images
            .store(
                self.desc.route_slug,
                record.id,
                extension,
                bytes,
                record.og_image.as_deref(),
            )
            .await?;
        record.og_image = Some(path);
        let updated = self.store.update(&record).await?;
        Ok(envelope(
            self.desc.entity_key,
            format::base(self.desc, &updated),
            format!("{} OG image updated successfully", self.desc.entity),
        ))
    }

    // -----------------------------------------------------------------------
    // Translation mutations
    // -----------------------------------------------------------------------

    pub async fn create_translation(&self, parent_id: DbId, data: &FieldMap) -> DomainResult<Value> {
        let result = self.create_translation_inner(parent_id, data).await;
        self.log_outcome("create_translation", &result);
        result
    }

    async fn create_translation_inner(
        &self,
        parent_id: DbId,
        data: &FieldMap,
    ) -> DomainResult<Value> {
        let parent = self.require_exists(parent_id).await?;
        payload::ensure_known_fields(data, &self.desc.translation_fields())?;

        let name = payload::require_str(data, self.desc.name_field)?;
        validate::translation_name(self.desc.name_field, name)?;

        let description = payload::opt_str(data, self.desc.description_field)?;
        if let Some(text) = description {
            validate::description(self.desc.description_field, text)?;
        }

        let language_id = self
            .languages
            .validate(data.get(LANGUAGE_ID_FIELD))
            .await?;
        self.ensure_unique_translation(&parent, language_id).await?;

        let record = self
            .store
            .insert_translation(NewTranslation {
                parent_id: parent.id,
                language_id,
                name,
                description,
            })
            .await?;

        let mut map = Map::new();
        map.insert(
            self.desc.entity_key.to_string(),
            format::base(self.desc, &parent),
        );
        map.insert(
            "translation".to_string(),
            format::translation(self.desc, &record),
        );
        map.insert(
            "message".to_string(),
            Value::String(format!(
                "{} translation created successfully",
                self.desc.entity
            )),
        );
        Ok(Value::Object(map))
    }

    pub async fn update_translation(
        &self,
        parent_id: DbId,
        translation_id: DbId,
        data: &FieldMap,
    ) -> DomainResult<Value> {
        let result = self
            .update_translation_inner(parent_id, translation_id, data)
            .await;
        self.log_outcome("update_translation", &result);
        result
    }

    async fn update_translation_inner(
        &self,
        parent_id: DbId,
        translation_id: DbId,
        data: &FieldMap,
    ) -> DomainResult<Value> {
        let parent = self.require_exists(parent_id).await?;
        let mut record = self.require_translation(&parent, translation_id).await?;

        // LanguageID is immutable post-creation: its mere presence fails the
        // request, before any field is touched and regardless of the value.
        if data.contains_key(LANGUAGE_ID_FIELD) {
            return Err(DomainError::ImmutableField {
                field: LANGUAGE_ID_FIELD,
            });
        }
        payload::ensure_known_fields(
            data,
            &[self.desc.name_field, self.desc.description_field],
        )?;

        let new_name = payload::update_if_present(data, self.desc.name_field, |value| {
            validate::translation_name(self.desc.name_field, value)
        })?;
        if let Some(value) = new_name {
            record.name = value.to_string();
        }

        if let Some(text) = payload::opt_str(data, self.desc.description_field)? {
            validate::description(self.desc.description_field, text)?;
            record.description = Some(text.to_string());
        }

        let updated = self.store.update_translation(&record).await?;

        let mut map = Map::new();
        map.insert(
            self.desc.entity_key.to_string(),
            format::base(self.desc, &parent),
        );
        map.insert(
            "translation".to_string(),
            format::translation(self.desc, &updated),
        );
        map.insert(
            "message".to_string(),
            Value::String(format!(
                "{} translation updated successfully",
                self.desc.entity
            )),
        );
        Ok(Value::Object(map))
    }

    pub async fn delete_translation(
        &self,
        parent_id: DbId,
        translation_id: DbId,
    ) -> DomainResult<Value> {
        let result = self
            .delete_translation_inner(parent_id, translation_id)
            .await;
        self.log_outcome("delete_translation", &result);
        result
    }

    async fn delete_translation_inner(
        &self,
        parent_id: DbId,
        translation_id: DbId,
    ) -> DomainResult<Value> {
        let parent = self.require_exists(parent_id).await?;
        let record = self.require_translation(&parent, translation_id).await?;
        if !self.store.delete_translation(record.id).await? {
            return Err(DomainError::NotFound {
                entity: self.desc.translation_entity,
                id: translation_id,
            });
        }
        Ok(envelope(
            self.desc.entity_key,
            format::base(self.desc, &parent),
            format!("{} translation deleted successfully", self.desc.entity),
        ))
    }
}

/// All simple-entity services, addressable by URL slug.
pub struct ServiceRegistry {
    services: HashMap<&'static str, LocalizedEntityService>,
}

impl ServiceRegistry {
    /// Build one service per catalog entry, with stores supplied by the
    /// caller (PostgreSQL in production, in-memory in tests and demo mode).
    pub fn build<F>(languages: Arc<dyn LanguageDirectory>, mut make_store: F) -> Self
    where
        F: FnMut(&'static EntityDescriptor) -> Arc<dyn LocalizedStore>,
    {
        let mut services = HashMap::new();
        for &desc in catalog::ALL {
            let service =
                LocalizedEntityService::new(desc, make_store(desc), Arc::clone(&languages));
            services.insert(desc.route_slug, service);
        }
        Self { services }
    }

    pub fn get(&self, route_slug: &str) -> Option<&LocalizedEntityService> {
        self.services.get(route_slug)
    }

    /// Services in catalog (seeding) order.
    pub fn in_catalog_order(&self) -> impl Iterator<Item = &LocalizedEntityService> {
        catalog::ALL
            .iter()
            .filter_map(|desc| self.services.get(desc.route_slug))
    }
}
