//! Repository for the `employees` table.

use sqlx::PgPool;

use bizdir_core::employee::{EmployeeRecord, NewEmployee};
use bizdir_core::types::DbId;

use crate::models::EmployeeRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, link, language_id, category_id, job_title_id, active, \
    name, description, linkedin, instagram, facebook, twitter, og_image, \
    created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List all employees, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id");
        sqlx::query_as::<_, EmployeeRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_link(
        pool: &PgPool,
        link: &str,
    ) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE link = $1");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(link)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new employee, returning the created row.
    pub async fn insert(pool: &PgPool, new: &NewEmployee) -> Result<EmployeeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees
                (link, language_id, category_id, job_title_id, active,
                 name, description, linkedin, instagram, facebook, twitter)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(&new.link)
            .bind(new.language_id)
            .bind(new.category_id)
            .bind(new.job_title_id)
            .bind(new.active)
            .bind(&new.name)
            .bind(&new.description)
            .bind(&new.linkedin)
            .bind(&new.instagram)
            .bind(&new.facebook)
            .bind(&new.twitter)
            .fetch_one(pool)
            .await
    }

    /// Persist the mutable fields of an existing employee.
    pub async fn update(
        pool: &PgPool,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                link = $2,
                language_id = $3,
                category_id = $4,
                job_title_id = $5,
                active = $6,
                name = $7,
                description = $8,
                linkedin = $9,
                instagram = $10,
                facebook = $11,
                twitter = $12,
                og_image = $13,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(record.id)
            .bind(&record.link)
            .bind(record.language_id)
            .bind(record.category_id)
            .bind(record.job_title_id)
            .bind(record.active)
            .bind(&record.name)
            .bind(&record.description)
            .bind(&record.linkedin)
            .bind(&record.instagram)
            .bind(&record.facebook)
            .bind(&record.twitter)
            .bind(&record.og_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
