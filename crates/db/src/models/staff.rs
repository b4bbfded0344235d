//! Staff entity model and DTOs.

use nexa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A staff row from the `staff` table.
///
/// `skills` and `languages` are comma-joined free text; split them with
/// [`nexa_core::text::split_comma_list`] for display.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub degree: String,
    pub skills: String,
    pub languages: String,
    pub father_name: String,
    pub mother_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub pincode: String,
    /// Data URI or URL of the profile picture.
    pub image: String,
}

/// DTO for creating a staff member.
///
/// Mirrors the portal's profile form: every text field is required, the
/// picture is optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaff {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "is required"))]
    pub skills: String,
    #[validate(length(min = 1, message = "is required"))]
    pub languages: String,
    #[validate(length(min = 1, message = "is required"))]
    pub father_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub mother_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "is required"))]
    pub pincode: String,
    #[serde(default)]
    pub image: String,
}
