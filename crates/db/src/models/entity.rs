//! Rows shared by every simple localized entity table pair.

use serde::Serialize;
use sqlx::FromRow;

use bizdir_core::store::{BaseRecord, TranslationRecord};
use bizdir_core::types::{DbId, Timestamp};

/// A row from one of the base entity tables.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EntityRow {
    pub id: DbId,
    pub identity: String,
    pub og_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<EntityRow> for BaseRecord {
    fn from(row: EntityRow) -> Self {
        BaseRecord {
            id: row.id,
            identity: row.identity,
            og_image: row.og_image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A row from one of the translation tables.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TranslationRow {
    pub id: DbId,
    pub parent_id: DbId,
    pub language_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TranslationRow> for TranslationRecord {
    fn from(row: TranslationRow) -> Self {
        TranslationRecord {
            id: row.id,
            parent_id: row.parent_id,
            language_id: row.language_id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
