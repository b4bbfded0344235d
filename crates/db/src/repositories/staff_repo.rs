//! Repository for the `staff` table.

use nexa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::staff::{CreateStaff, Staff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, mobile, degree, skills, languages, father_name, \
                       mother_name, country, state, city, address, pincode, image";

/// [`COLUMNS`] qualified with the `s` alias, for joins against `staff s`.
pub(crate) const QUALIFIED_COLUMNS: &str =
    "s.id, s.name, s.email, s.mobile, s.degree, s.skills, s.languages, s.father_name, \
     s.mother_name, s.country, s.state, s.city, s.address, s.pincode, s.image";

/// Provides CRUD operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the new ID.
    pub async fn create(pool: &SqlitePool, input: &CreateStaff) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO staff
                (name, email, mobile, degree, skills, languages, father_name, mother_name,
                 country, state, city, address, pincode, image)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.mobile)
        .bind(&input.degree)
        .bind(&input.skills)
        .bind(&input.languages)
        .bind(&input.father_name)
        .bind(&input.mother_name)
        .bind(&input.country)
        .bind(&input.state)
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.pincode)
        .bind(&input.image)
        .fetch_one(pool)
        .await
    }

    /// Find a staff member by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = ?");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every staff member in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY id");
        sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
    }

    /// Delete a staff member and detach them from every project.
    ///
    /// In one transaction: membership rows for the staff member are removed,
    /// projects they head get `head_id = NULL`, then the staff row itself is
    /// deleted. Returns `true` if a staff row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let memberships = sqlx::query("DELETE FROM project_members WHERE staff_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let headed = sqlx::query("UPDATE projects SET head_id = NULL WHERE head_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM staff WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            staff_id = id,
            memberships_removed = memberships.rows_affected(),
            projects_unheaded = headed.rows_affected(),
            "Staff delete cascade applied"
        );

        Ok(result.rows_affected() > 0)
    }
}
