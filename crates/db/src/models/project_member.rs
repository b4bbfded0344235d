//! Project membership association row.

use nexa_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `project_members` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct ProjectMember {
    pub project_id: DbId,
    pub staff_id: DbId,
}
