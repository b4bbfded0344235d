//! Repository for the `projects` and `project_members` tables.

use std::collections::BTreeSet;

use nexa_core::project_status::PLANNING;
use nexa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{CreateProject, Project, ProjectWithMembers};
use crate::models::project_member::ProjectMember;
use crate::models::staff::Staff;
use crate::repositories::staff_repo::QUALIFIED_COLUMNS as STAFF_COLUMNS;

/// Project columns plus the head's name, selected from
/// `projects p LEFT JOIN staff h ON h.id = p.head_id`.
const COLUMNS: &str =
    "p.id, p.name, p.description, p.head_id, p.completion_date, p.status, h.name AS head_name";

/// Provides CRUD operations for projects and their membership rows.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and its member associations, returning the new ID.
    ///
    /// Runs in one transaction. Repeated member ids produce a single row. An
    /// unknown `head_id` or member id fails with a foreign-key violation and
    /// nothing is written.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let project_id: DbId = sqlx::query_scalar(
            "INSERT INTO projects (name, description, head_id, completion_date, status)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.head_id)
        .bind(&input.completion_date)
        .bind(PLANNING)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(member_ids) = input.member_ids.as_deref() {
            if !member_ids.is_empty() {
                Self::add_members_inner(&mut tx, project_id, member_ids).await?;
            }
        }

        tx.commit().await?;
        Ok(project_id)
    }

    /// Find a project by its internal ID, with the head's name resolved.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             LEFT JOIN staff h ON h.id = p.head_id
             WHERE p.id = ?"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every project in insertion order, with the head's name resolved.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             LEFT JOIN staff h ON h.id = p.head_id
             ORDER BY p.id"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List every project with the full staff rows of its members.
    ///
    /// One query for the projects, then one member query per project.
    pub async fn list_with_members(
        pool: &SqlitePool,
    ) -> Result<Vec<ProjectWithMembers>, sqlx::Error> {
        let projects = Self::list(pool).await?;
        let mut results = Vec::with_capacity(projects.len());

        for project in projects {
            let members = Self::list_members(pool, project.id).await?;
            results.push(ProjectWithMembers { project, members });
        }

        Ok(results)
    }

    /// Full staff rows of a project's members, ordered by staff ID.
    pub async fn list_members(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!(
            "SELECT {STAFF_COLUMNS} FROM staff s
             JOIN project_members pm ON pm.staff_id = s.id
             WHERE pm.project_id = ?
             ORDER BY s.id"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Every membership row, ordered by project then staff.
    pub async fn list_memberships(pool: &SqlitePool) -> Result<Vec<ProjectMember>, sqlx::Error> {
        sqlx::query_as::<_, ProjectMember>(
            "SELECT project_id, staff_id FROM project_members ORDER BY project_id, staff_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a project and its membership rows in one transaction.
    ///
    /// Returns `true` if a project row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let memberships = sqlx::query("DELETE FROM project_members WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            project_id = id,
            memberships_removed = memberships.rows_affected(),
            "Project delete cascade applied"
        );

        Ok(result.rows_affected() > 0)
    }

    async fn add_members_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        project_id: DbId,
        member_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let distinct: BTreeSet<DbId> = member_ids.iter().copied().collect();

        for staff_id in distinct {
            sqlx::query(
                "INSERT INTO project_members (project_id, staff_id) VALUES (?, ?)
                 ON CONFLICT (project_id, staff_id) DO NOTHING",
            )
            .bind(project_id)
            .bind(staff_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
