//! Shared response envelope types for API handlers.
//!
//! Mutating endpoints answer with a `{ "success": true, ... }` envelope that
//! the portal front end checks before refreshing its lists.

use nexa_core::types::DbId;
use serde::Serialize;

/// `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "id": N }` returned after an insert.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: DbId,
}

impl CreatedResponse {
    pub fn new(id: DbId) -> Self {
        Self { success: true, id }
    }
}
