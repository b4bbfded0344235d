//! Handlers for the `/staff` resource.

use axum::extract::{Path, State};
use axum::Json;
use nexa_core::error::CoreError;
use nexa_core::ids::parse_id;
use nexa_db::models::staff::{CreateStaff, Staff};
use nexa_db::repositories::StaffRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/staff
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    Ok(Json(staff))
}

/// POST /api/staff
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStaff>,
) -> AppResult<Json<CreatedResponse>> {
    let id = StaffRepo::create(&state.pool, &input).await?;
    tracing::info!(staff_id = id, "Staff member created");
    Ok(Json(CreatedResponse::new(id)))
}

/// DELETE /api/staff/{id}
///
/// Also removes the member from every project and clears them as head.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_id(&raw_id, "Staff").inspect_err(|_| {
        tracing::warn!(raw_id = %raw_id, "Rejected staff delete: invalid id");
    })?;

    tracing::info!(staff_id = id, "Deleting staff member");

    let deleted = StaffRepo::delete(&state.pool, id).await.inspect_err(|e| {
        tracing::error!(staff_id = id, error = %e, "Staff delete failed");
    })?;

    if deleted {
        tracing::info!(staff_id = id, "Staff member deleted");
        Ok(Json(SuccessResponse::ok()))
    } else {
        tracing::warn!(staff_id = id, "Staff member not found for deletion");
        Err(CoreError::NotFound { entity: "Staff", id }.into())
    }
}
