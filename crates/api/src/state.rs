use std::sync::Arc;

use bizdir_core::catalog;
use bizdir_core::directory::{LanguageDirectory, OgImageStore, StaticLanguages, StoreCategoryDirectory};
use bizdir_core::employee::EmployeeService;
use bizdir_core::service::ServiceRegistry;
use bizdir_core::store::memory::{MemoryEmployeeStore, MemoryStore};
use bizdir_db::stores::{PgEmployeeStore, PgLanguageDirectory, PgLocalizedStore};
use bizdir_db::DbPool;

use crate::config::ServerConfig;
use crate::storage::LocalOgImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// One localized-entity service per catalog entry, keyed by URL slug.
    pub registry: Arc<ServiceRegistry>,
    /// The employee specialization.
    pub employees: Arc<EmployeeService>,
    /// OG-image storage.
    pub og_images: Arc<dyn OgImageStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Database connection pool. `None` when running on the in-memory
    /// backend (tests, demo mode).
    pub pool: Option<DbPool>,
}

impl AppState {
    /// Wire every service against PostgreSQL.
    pub fn with_postgres(pool: DbPool, config: ServerConfig) -> Self {
        let languages: Arc<dyn LanguageDirectory> =
            Arc::new(PgLanguageDirectory::new(pool.clone()));
        let registry = Arc::new(ServiceRegistry::build(Arc::clone(&languages), |desc| {
            Arc::new(PgLocalizedStore::new(pool.clone(), desc))
        }));
        let employees = Arc::new(build_employee_service(
            &registry,
            Arc::new(PgEmployeeStore::new(pool.clone())),
            languages,
        ));
        Self {
            registry,
            employees,
            og_images: Arc::new(LocalOgImageStore::new(config.og_image_dir.clone())),
            config: Arc::new(config),
            pool: Some(pool),
        }
    }

    /// Wire every service against the in-memory backend. Used by the
    /// integration tests and by demo mode.
    pub fn in_memory(config: ServerConfig) -> Self {
        let languages: Arc<dyn LanguageDirectory> = Arc::new(StaticLanguages::with_defaults());
        let registry = Arc::new(ServiceRegistry::build(Arc::clone(&languages), |_| {
            Arc::new(MemoryStore::new())
        }));
        let employees = Arc::new(build_employee_service(
            &registry,
            Arc::new(MemoryEmployeeStore::new()),
            languages,
        ));
        Self {
            registry,
            employees,
            og_images: Arc::new(LocalOgImageStore::new(config.og_image_dir.clone())),
            config: Arc::new(config),
            pool: None,
        }
    }
}

/// The employee service borrows the job-title and category stores from the
/// registry so both layers see the same data.
fn build_employee_service(
    registry: &ServiceRegistry,
    store: Arc<dyn bizdir_core::employee::EmployeeStore>,
    languages: Arc<dyn LanguageDirectory>,
) -> EmployeeService {
    let job_titles = registry
        .get(catalog::EMPLOYEE_JOB_TITLE.route_slug)
        .expect("job titles wired in catalog")
        .store()
        .clone();
    let categories = registry
        .get(catalog::CATEGORY.route_slug)
        .expect("categories wired in catalog")
        .store()
        .clone();
    EmployeeService::new(
        store,
        job_titles,
        Arc::new(StoreCategoryDirectory::new(categories)),
        languages,
    )
}
