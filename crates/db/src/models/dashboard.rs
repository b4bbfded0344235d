//! Aggregate counts for the portal dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_staff: i64,
    pub total_projects: i64,
    /// Projects whose status is anything other than `Completed`.
    pub active_projects: i64,
    pub completed_projects: i64,
}
