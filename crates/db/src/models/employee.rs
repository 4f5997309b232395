//! Employee row.

use serde::Serialize;
use sqlx::FromRow;

use bizdir_core::employee::EmployeeRecord;
use bizdir_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeRow {
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

impl From<EmployeeRow> for EmployeeRecord {
    fn from(row: EmployeeRow) -> Self {
        EmployeeRecord {
            id: row.id,
            link: row.link,
            language_id: row.language_id,
            category_id: row.category_id,
            job_title_id: row.job_title_id,
            active: row.active,
            name: row.name,
            description: row.description,
            linkedin: row.linkedin,
            instagram: row.instagram,
            facebook: row.facebook,
            twitter: row.twitter,
            og_image: row.og_image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
