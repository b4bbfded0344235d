//! Read-only aggregates for the dashboard.

use nexa_core::project_status::COMPLETED;
use sqlx::SqlitePool;

use crate::models::dashboard::DashboardStats;

/// Provides dashboard aggregate queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count staff and projects, splitting projects by completion.
    pub async fn stats(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM staff) AS total_staff,
                (SELECT COUNT(*) FROM projects) AS total_projects,
                (SELECT COUNT(*) FROM projects WHERE status <> ?) AS active_projects,
                (SELECT COUNT(*) FROM projects WHERE status = ?) AS completed_projects",
        )
        .bind(COMPLETED)
        .bind(COMPLETED)
        .fetch_one(pool)
        .await
    }
}
