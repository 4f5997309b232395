//! Idempotent demo-data seeding.
//!
//! Best-effort by design: items whose identity already exists are skipped,
//! and a failure on one item is logged and never aborts the rest. The job
//! titles set must contain the `HIRED` and `FIRED` codes the employee
//! module depends on.

use serde_json::{json, Map, Value};

use crate::catalog::{EntityDescriptor, LANGUAGE_ID_FIELD};
use crate::employee::{CreateEmployee, EmployeeService};
use crate::error::DomainResult;
use crate::payload::FieldMap;
use crate::service::{LocalizedEntityService, ServiceRegistry};
use crate::types::DbId;

/// Language the demo translations are written in (English, seeded first by
/// the languages migration).
pub const DEFAULT_LANGUAGE: DbId = 1;

/// One demo item: identity slug plus an English translation.
pub struct SeedEntry {
    pub identity: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
}

const fn entry(identity: &'static str, name: &'static str) -> SeedEntry {
    SeedEntry {
        identity,
        name,
        description: None,
    }
}

const CATEGORIES: &[SeedEntry] = &[
    SeedEntry {
        identity: "tech",
        name: "Technology",
        description: Some("Software, hardware and IT services"),
    },
    entry("finance", "Finance"),
    entry("health", "Healthcare"),
];

const COUNTRIES: &[SeedEntry] = &[
    entry("us", "United States"),
    entry("de", "Germany"),
    entry("fr", "France"),
];

const INDUSTRIES: &[SeedEntry] = &[
    entry("software", "Software"),
    entry("banking", "Banking"),
    entry("retail", "Retail"),
];

const JOB_TITLES: &[SeedEntry] = &[
    entry("HIRED", "Hired"),
    entry("FIRED", "Fired"),
    entry("engineer", "Engineer"),
    entry("manager", "Manager"),
];

const MARITAL_STATUSES: &[SeedEntry] = &[
    entry("single", "Single"),
    entry("married", "Married"),
    entry("divorced", "Divorced"),
    entry("widowed", "Widowed"),
];

const EDUCATION_LEVELS: &[SeedEntry] = &[
    entry("primary", "Primary education"),
    entry("secondary", "Secondary education"),
    entry("bachelor", "Bachelor degree"),
    entry("master", "Master degree"),
    entry("doctorate", "Doctorate"),
];

const MISSION_STATEMENTS: &[SeedEntry] = &[
    SeedEntry {
        identity: "community",
        name: "Community first",
        description: Some("We give back to the communities we operate in"),
    },
    entry("innovation", "Innovation"),
];

const CHARITIES: &[SeedEntry] = &[
    entry("redcross", "Red Cross"),
    entry("unicef", "UNICEF"),
];

const ROLE_STATUSES: &[SeedEntry] = &[
    entry("active", "Active"),
    entry("pending", "Pending"),
    entry("retired", "Retired"),
];

/// Demo entries for one entity.
pub fn entries_for(desc: &EntityDescriptor) -> &'static [SeedEntry] {
    match desc.entity {
        "Category" => CATEGORIES,
        "Country" => COUNTRIES,
        "Industry" => INDUSTRIES,
        "EmployeeJobTitle" => JOB_TITLES,
        "MaritalStatus" => MARITAL_STATUSES,
        "EducationLevel" => EDUCATION_LEVELS,
        "MissionStatement" => MISSION_STATEMENTS,
        "Charity" => CHARITIES,
        "RoleStatus" => ROLE_STATUSES,
        _ => &[],
    }
}

/// Create one entry (base record plus English translation) unless its
/// identity already exists. Returns whether anything was created.
async fn seed_one(
    service: &LocalizedEntityService,
    entry: &SeedEntry,
    language_id: DbId,
) -> DomainResult<bool> {
    let desc = service.descriptor();
    if service
        .store()
        .find_by_identity(entry.identity)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let mut data = FieldMap::new();
    data.insert(desc.identity_field.to_string(), json!(entry.identity));
    service.create(&data).await?;

    let parent = service
        .store()
        .find_by_identity(entry.identity)
        .await?
        .ok_or(crate::error::DomainError::Unexpected(format!(
            "seeded {} '{}' did not persist",
            desc.entity, entry.identity
        )))?;

    let mut translation = FieldMap::new();
    translation.insert(desc.name_field.to_string(), json!(entry.name));
    if let Some(description) = entry.description {
        translation.insert(desc.description_field.to_string(), json!(description));
    }
    translation.insert(LANGUAGE_ID_FIELD.to_string(), json!(language_id));
    service.create_translation(parent.id, &translation).await?;

    Ok(true)
}

/// Seed all demo entries for one entity, swallowing per-item failures.
pub async fn seed_entity(service: &LocalizedEntityService, language_id: DbId) -> Value {
    let desc = service.descriptor();
    let mut created = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for entry in entries_for(desc) {
        match seed_one(service, entry, language_id).await {
            Ok(true) => created += 1,
            Ok(false) => skipped += 1,
            Err(err) => {
                tracing::warn!(
                    entity = desc.entity,
                    identity = entry.identity,
                    error = %err,
                    "seed item failed, continuing"
                );
                failed += 1;
            }
        }
    }
    json!({"created": created, "skipped": skipped, "failed": failed})
}

const DEMO_EMPLOYEES: &[(&str, &str)] = &[("jane-doe", "Jane Doe"), ("john-smith", "John Smith")];

/// Seed two demo employees into the "tech" category. Requires categories
/// and job titles to be seeded first; anything missing downgrades to a
/// warning.
pub async fn seed_employees(employees: &EmployeeService, registry: &ServiceRegistry) -> Value {
    let mut created = 0;
    let mut skipped = 0;
    let mut failed = 0;

    let category_id = match registry.get("categories") {
        Some(categories) => match categories.store().find_by_identity("tech").await {
            Ok(Some(record)) => Some(record.id),
            _ => None,
        },
        None => None,
    };
    let Some(category_id) = category_id else {
        tracing::warn!("demo category 'tech' unavailable, skipping employee seeding");
        return json!({"created": 0, "skipped": 0, "failed": DEMO_EMPLOYEES.len()});
    };

    for (link, name) in DEMO_EMPLOYEES {
        let input = CreateEmployee {
            link: (*link).to_string(),
            language_id: DEFAULT_LANGUAGE,
            category_id,
            name: (*name).to_string(),
            description: None,
            linkedin: None,
            instagram: None,
            facebook: None,
            twitter: None,
        };
        match employees.create(input).await {
            Ok(_) => created += 1,
            Err(crate::error::DomainError::Duplicate { .. }) => skipped += 1,
            Err(err) => {
                tracing::warn!(link, error = %err, "employee seed item failed, continuing");
                failed += 1;
            }
        }
    }
    json!({"created": created, "skipped": skipped, "failed": failed})
}

/// Seed every entity in catalog order, then the demo employees.
pub async fn run(registry: &ServiceRegistry, employees: &EmployeeService) -> Value {
    let mut summary = Map::new();
    for service in registry.in_catalog_order() {
        let outcome = seed_entity(service, DEFAULT_LANGUAGE).await;
        summary.insert(service.descriptor().plural_key.to_string(), outcome);
    }
    summary.insert(
        "employees".to_string(),
        seed_employees(employees, registry).await,
    );
    summary.insert(
        "message".to_string(),
        Value::String("Demo data seeded".to_string()),
    );
    Value::Object(summary)
}
