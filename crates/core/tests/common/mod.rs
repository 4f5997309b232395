//! Shared fixtures for the service-engine test suites.
//!
//! Everything runs against the in-memory backend, so the suites exercise
//! the exact write-time invariants the services enforce (the store itself
//! enforces none).

use std::sync::Arc;

use serde_json::Value;

use bizdir_core::catalog::{self, EntityDescriptor};
use bizdir_core::directory::{StaticLanguages, StoreCategoryDirectory};
use bizdir_core::employee::EmployeeService;
use bizdir_core::payload::FieldMap;
use bizdir_core::service::{LocalizedEntityService, ServiceRegistry};
use bizdir_core::store::memory::{MemoryEmployeeStore, MemoryStore};
use bizdir_core::store::{LocalizedStore, NewBaseRecord};
use bizdir_core::types::DbId;

/// A category service over a fresh in-memory store.
pub fn category_service() -> LocalizedEntityService {
    service_for(&catalog::CATEGORY)
}

/// A service for an arbitrary catalog entity over a fresh store.
pub fn service_for(desc: &'static EntityDescriptor) -> LocalizedEntityService {
    LocalizedEntityService::new(
        desc,
        Arc::new(MemoryStore::new()),
        Arc::new(StaticLanguages::with_defaults()),
    )
}

/// A full registry, one in-memory store per entity.
pub fn registry() -> ServiceRegistry {
    ServiceRegistry::build(Arc::new(StaticLanguages::with_defaults()), |_| {
        Arc::new(MemoryStore::new())
    })
}

/// Employee service plus the job-title store it resolves codes against.
/// Job titles HIRED and FIRED are pre-provisioned; one category exists.
pub async fn employee_fixture() -> (EmployeeService, Arc<dyn LocalizedStore>, DbId) {
    let job_titles: Arc<dyn LocalizedStore> = Arc::new(MemoryStore::new());
    for code in ["HIRED", "FIRED", "engineer"] {
        job_titles
            .insert(NewBaseRecord {
                identity: code,
                og_image: None,
            })
            .await
            .unwrap();
    }

    let categories: Arc<dyn LocalizedStore> = Arc::new(MemoryStore::new());
    let category = categories
        .insert(NewBaseRecord {
            identity: "tech",
            og_image: None,
        })
        .await
        .unwrap();

    let service = EmployeeService::new(
        Arc::new(MemoryEmployeeStore::new()),
        Arc::clone(&job_titles),
        Arc::new(StoreCategoryDirectory::new(categories)),
        Arc::new(StaticLanguages::with_defaults()),
    );
    (service, job_titles, category.id)
}

/// Build a payload map from a `json!` object literal.
pub fn fields(value: Value) -> FieldMap {
    value.as_object().expect("payload must be an object").clone()
}

/// Pull the created record's id out of a response envelope.
pub fn created_id(envelope: &Value, desc: &EntityDescriptor) -> DbId {
    envelope[desc.entity_key][desc.id_field]
        .as_i64()
        .expect("envelope carries the new id")
}

/// Find the job title id for a code in the fixture store.
pub async fn job_title_id(store: &Arc<dyn LocalizedStore>, code: &str) -> DbId {
    store.find_by_identity(code).await.unwrap().unwrap().id
}
