//! Project entity model and DTOs.

use nexa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::staff::Staff;

/// A project row from the `projects` table with its head's name resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Weak reference to the project head; `None` once that staff member is deleted.
    pub head_id: Option<DbId>,
    pub completion_date: String,
    pub status: String,
    /// `staff.name` of the head, joined at read time.
    pub head_name: Option<String>,
}

/// A project together with the full staff rows of its members.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithMembers {
    #[serde(flatten)]
    pub project: Project,
    pub members: Vec<Staff>,
}

/// DTO for creating a project. Status always starts as `Planning`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    pub head_id: Option<DbId>,
    #[validate(length(min = 1, message = "is required"))]
    pub completion_date: String,
    /// Staff ids to attach as members. Duplicates are collapsed.
    pub member_ids: Option<Vec<DbId>>,
}
