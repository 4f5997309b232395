//! Employee module: the one genuine specialization of the entity pattern.
//!
//! Employees are not localized; instead they reference a display language
//! and a category through the directory collaborators, and carry a
//! system-managed job title driven by the activity flag: new hires get the
//! title coded `HIRED`, deactivation reassigns `FIRED`, and `FIRED` can
//! never be assigned by the client directly.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::directory::{CategoryDirectory, LanguageDirectory, OgImageStore};
use crate::error::{DomainError, DomainResult};
use crate::payload::{self, FieldMap};
use crate::store::LocalizedStore;
use crate::types::{DbId, Timestamp};
use crate::validate;

/// Job-title code assigned to new and reactivated employees.
pub const HIRED_CODE: &str = "HIRED";

/// Job-title code assigned on deactivation; never client-assignable.
pub const FIRED_CODE: &str = "FIRED";

/// Wire field name of the activity flag.
pub const EMPLOYEE_ACTIVE_FIELD: &str = "EmployeeActive";

/// URL slug for employee OG images.
const EMPLOYEE_SLUG: &str = "employees";

/// A persisted employee row.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub id: DbId,
    pub link: String,
    pub language_id: DbId,
    pub category_id: DbId,
    pub job_title_id: DbId,
    pub active: bool,
    pub name: String,
    pub description: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub og_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for an employee.
#[derive(Debug)]
pub struct NewEmployee {
    pub link: String,
    pub language_id: DbId,
    pub category_id: DbId,
    pub job_title_id: DbId,
    pub active: bool,
    pub name: String,
    pub description: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

/// Persistence contract for employees.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<EmployeeRecord>>;
    async fn find_by_id(&self, id: DbId) -> DomainResult<Option<EmployeeRecord>>;
    async fn find_by_link(&self, link: &str) -> DomainResult<Option<EmployeeRecord>>;
    async fn insert(&self, new: NewEmployee) -> DomainResult<EmployeeRecord>;
    async fn update(&self, record: &EmployeeRecord) -> DomainResult<EmployeeRecord>;
    async fn delete(&self, id: DbId) -> DomainResult<bool>;
}

/// DTO for creating an employee. Unknown keys are rejected at
/// deserialization; character-class rules are applied by the service on top
/// of the declarative length checks.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateEmployee {
    #[serde(rename = "EmployeeLink")]
    #[validate(length(min = 1, max = 50))]
    pub link: String,
    #[serde(rename = "LanguageID")]
    pub language_id: DbId,
    #[serde(rename = "CategoryID")]
    pub category_id: DbId,
    #[serde(rename = "EmployeeName")]
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(rename = "EmployeeDescription")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(rename = "EmployeeLinkedIn")]
    #[validate(length(max = 100))]
    pub linkedin: Option<String>,
    #[serde(rename = "EmployeeInstagram")]
    #[validate(length(max = 100))]
    pub instagram: Option<String>,
    #[serde(rename = "EmployeeFacebook")]
    #[validate(length(max = 100))]
    pub facebook: Option<String>,
    #[serde(rename = "EmployeeTwitter")]
    #[validate(length(max = 100))]
    pub twitter: Option<String>,
}

/// DTO for updating an employee. The activity flag is absent on purpose:
/// it only moves through `toggle_status`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployee {
    #[serde(rename = "EmployeeLink")]
    #[validate(length(min = 1, max = 50))]
    pub link: Option<String>,
    #[serde(rename = "LanguageID")]
    pub language_id: Option<DbId>,
    #[serde(rename = "CategoryID")]
    pub category_id: Option<DbId>,
    #[serde(rename = "EmployeeJobTitleID")]
    pub job_title_id: Option<DbId>,
    #[serde(rename = "EmployeeName")]
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[serde(rename = "EmployeeDescription")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(rename = "EmployeeLinkedIn")]
    #[validate(length(max = 100))]
    pub linkedin: Option<String>,
    #[serde(rename = "EmployeeInstagram")]
    #[validate(length(max = 100))]
    pub instagram: Option<String>,
    #[serde(rename = "EmployeeFacebook")]
    #[validate(length(max = 100))]
    pub facebook: Option<String>,
    #[serde(rename = "EmployeeTwitter")]
    #[validate(length(max = 100))]
    pub twitter: Option<String>,
}

/// Wire projection of an employee row.
pub fn wire(record: &EmployeeRecord) -> Value {
    json!({
        "EmployeeID": record.id,
        "EmployeeLink": record.link,
        "LanguageID": record.language_id,
        "CategoryID": record.category_id,
        "EmployeeJobTitleID": record.job_title_id,
        "EmployeeActive": record.active,
        "EmployeeName": record.name,
        "EmployeeDescription": record.description,
        "EmployeeLinkedIn": record.linkedin,
        "EmployeeInstagram": record.instagram,
        "EmployeeFacebook": record.facebook,
        "EmployeeTwitter": record.twitter,
        "OgImage": record.og_image,
    })
}

fn envelope(key: &str, value: Value, message: String) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map.insert("message".to_string(), Value::String(message));
    Value::Object(map)
}

/// Employee operations.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    job_titles: Arc<dyn LocalizedStore>,
    categories: Arc<dyn CategoryDirectory>,
    languages: Arc<dyn LanguageDirectory>,
}

impl EmployeeService {
    pub fn new(
        store: Arc<dyn EmployeeStore>,
        job_titles: Arc<dyn LocalizedStore>,
        categories: Arc<dyn CategoryDirectory>,
        languages: Arc<dyn LanguageDirectory>,
    ) -> Self {
        Self {
            store,
            job_titles,
            categories,
            languages,
        }
    }

    fn log_outcome<T>(&self, op: &'static str, result: &DomainResult<T>) {
        if let Err(err) = result {
            if err.is_client_fault() {
                tracing::warn!(entity = "Employee", op, error = %err, "operation rejected");
            } else {
                tracing::error!(entity = "Employee", op, error = %err, "operation failed");
            }
        }
    }

    async fn require_exists(&self, id: DbId) -> DomainResult<EmployeeRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Employee",
                id,
            })
    }

    async fn ensure_unique_link(&self, link: &str, exclude_id: Option<DbId>) -> DomainResult<()> {
        if let Some(existing) = self.store.find_by_link(link).await? {
            if Some(existing.id) != exclude_id {
                return Err(DomainError::Duplicate {
                    entity: "Employee",
                    value: link.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Look up a system job title by code. These come from seeding; a
    /// missing one is a provisioning fault, not a client error.
    async fn job_title_by_code(&self, code: &str) -> DomainResult<DbId> {
        match self.job_titles.find_by_identity(code).await? {
            Some(title) => Ok(title.id),
            None => Err(DomainError::Unexpected(format!(
                "job title '{code}' is not provisioned"
            ))),
        }
    }

    fn validate_profile(
        name: Option<&str>,
        description: Option<&str>,
        linkedin: Option<&str>,
        instagram: Option<&str>,
        facebook: Option<&str>,
        twitter: Option<&str>,
    ) -> DomainResult<()> {
        if let Some(value) = name {
            validate::profile_name("EmployeeName", value)?;
        }
        if let Some(value) = description {
            validate::description("EmployeeDescription", value)?;
        }
        if let Some(value) = linkedin {
            validate::social_handle("EmployeeLinkedIn", value)?;
        }
        if let Some(value) = instagram {
            validate::social_handle("EmployeeInstagram", value)?;
        }
        if let Some(value) = facebook {
            validate::social_handle("EmployeeFacebook", value)?;
        }
        if let Some(value) = twitter {
            validate::social_handle("EmployeeTwitter", value)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    pub async fn list(&self) -> DomainResult<Value> {
        let result = self.list_inner().await;
        self.log_outcome("list", &result);
        result
    }

    async fn list_inner(&self) -> DomainResult<Value> {
        let records = self.store.list().await?;
        let message = if records.is_empty() {
            "No employees found".to_string()
        } else {
            "Employees retrieved successfully".to_string()
        };
        let items: Vec<Value> = records.iter().map(wire).collect();
        Ok(envelope("employees", Value::Array(items), message))
    }

    pub async fn get_by_id(&self, id: DbId) -> DomainResult<Value> {
        let result = self.get_by_id_inner(id).await;
        self.log_outcome("get_by_id", &result);
        result
    }

    async fn get_by_id_inner(&self, id: DbId) -> DomainResult<Value> {
        let record = self.require_exists(id).await?;
        Ok(envelope(
            "employee",
            wire(&record),
            "Employee retrieved successfully".to_string(),
        ))
    }

    pub async fn create(&self, input: CreateEmployee) -> DomainResult<Value> {
        let result = self.create_inner(input).await;
        self.log_outcome("create", &result);
        result
    }

    async fn create_inner(&self, input: CreateEmployee) -> DomainResult<Value> {
        input
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;
        validate::identity("EmployeeLink", &input.link)?;
        Self::validate_profile(
            Some(&input.name),
            input.description.as_deref(),
            input.linkedin.as_deref(),
            input.instagram.as_deref(),
            input.facebook.as_deref(),
            input.twitter.as_deref(),
        )?;

        self.ensure_unique_link(&input.link, None).await?;
        self.languages.require(input.language_id).await?;
        self.categories.validate_exists(input.category_id).await?;
        let job_title_id = self.job_title_by_code(HIRED_CODE).await?;

        let record = self
            .store
            .insert(NewEmployee {
                link: input.link,
                language_id: input.language_id,
                category_id: input.category_id,
                job_title_id,
                active: true,
                name: input.name,
                description: input.description,
                linkedin: input.linkedin,
                instagram: input.instagram,
                facebook: input.facebook,
                twitter: input.twitter,
            })
            .await?;
        Ok(envelope(
            "employee",
            wire(&record),
            "Employee created successfully".to_string(),
        ))
    }

    pub async fn update(&self, id: DbId, input: UpdateEmployee) -> DomainResult<Value> {
        let result = self.update_inner(id, input).await;
        self.log_outcome("update", &result);
        result
    }

    async fn update_inner(&self, id: DbId, input: UpdateEmployee) -> DomainResult<Value> {
        let mut record = self.require_exists(id).await?;
        input
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;
        Self::validate_profile(
            input.name.as_deref(),
            input.description.as_deref(),
            input.linkedin.as_deref(),
            input.instagram.as_deref(),
            input.facebook.as_deref(),
            input.twitter.as_deref(),
        )?;

        if let Some(link) = input.link {
            validate::identity("EmployeeLink", &link)?;
            self.ensure_unique_link(&link, Some(record.id)).await?;
            record.link = link;
        }
        if let Some(language_id) = input.language_id {
            self.languages.require(language_id).await?;
            record.language_id = language_id;
        }
        if let Some(category_id) = input.category_id {
            self.categories.validate_exists(category_id).await?;
            record.category_id = category_id;
        }
        if let Some(job_title_id) = input.job_title_id {
            let title = self.job_titles.find_by_id(job_title_id).await?.ok_or(
                DomainError::NotFound {
                    entity: "EmployeeJobTitle",
                    id: job_title_id,
                },
            )?;
            if title.identity == FIRED_CODE {
                return Err(DomainError::Validation(format!(
                    "the {FIRED_CODE} job title is system-managed and cannot be assigned"
                )));
            }
            record.job_title_id = job_title_id;
        }
        if let Some(name) = input.name {
            record.name = name;
        }
        if let Some(description) = input.description {
            record.description = Some(description);
        }
        if let Some(linkedin) = input.linkedin {
            record.linkedin = Some(linkedin);
        }
        if let Some(instagram) = input.instagram {
            record.instagram = Some(instagram);
        }
        if let Some(facebook) = input.facebook {
            record.facebook = Some(facebook);
        }
        if let Some(twitter) = input.twitter {
            record.twitter = Some(twitter);
        }

        let updated = self.store.update(&record).await?;
        Ok(envelope(
            "employee",
            wire(&updated),
            "Employee updated successfully".to_string(),
        ))
    }

    /// Flip the activity flag and reassign the system job title. The
    /// payload must carry `EmployeeActive` and nothing else.
    pub async fn toggle_status(&self, id: DbId, data: &FieldMap) -> DomainResult<Value> {
        let result = self.toggle_status_inner(id, data).await;
        self.log_outcome("toggle_status", &result);
        result
    }

    async fn toggle_status_inner(&self, id: DbId, data: &FieldMap) -> DomainResult<Value> {
        let mut record = self.require_exists(id).await?;
        payload::ensure_known_fields(data, &[EMPLOYEE_ACTIVE_FIELD])?;
        let active = payload::require_bool(data, EMPLOYEE_ACTIVE_FIELD)?;

        let code = if active { HIRED_CODE } else { FIRED_CODE };
        record.job_title_id = self.job_title_by_code(code).await?;
        record.active = active;

        let updated = self.store.update(&record).await?;
        Ok(envelope(
            "employee",
            wire(&updated),
            format!(
                "Employee {} successfully",
                if active { "activated" } else { "deactivated" }
            ),
        ))
    }

    pub async fn delete(&self, id: DbId) -> DomainResult<Value> {
        let result = self.delete_inner(id).await;
        self.log_outcome("delete", &result);
        result
    }

    async fn delete_inner(&self, id: DbId) -> DomainResult<Value> {
        let record = self.require_exists(id).await?;
        if !self.store.delete(record.id).await? {
            return Err(DomainError::NotFound {
                entity: "Employee",
                id,
            });
        }
        Ok(json!({"message": "Employee deleted successfully"}))
    }

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
        let mut record = self.require_exists(id).await?;
        let path = images
            .store(
                EMPLOYEE_SLUG,
                record.id,
                extension,
                bytes,
                record.og_image.as_deref(),
            )
            .await?;
        record.og_image = Some(path);
        let updated = self.store.update(&record).await?;
        Ok(envelope(
            "employee",
            wire(&updated),
            "Employee OG image updated successfully".to_string(),
        ))
    }
}
