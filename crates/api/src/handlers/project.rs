//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use nexa_core::error::CoreError;
use nexa_core::ids::parse_id;
use nexa_db::models::project::{CreateProject, ProjectWithMembers};
use nexa_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/projects
///
/// Every project with `head_name` resolved and its members' full staff rows.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithMembers>>> {
    let projects = ProjectRepo::list_with_members(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<Json<CreatedResponse>> {
    let id = ProjectRepo::create(&state.pool, &input).await.map_err(|e| {
        if nexa_db::is_foreign_key_violation(&e) {
            tracing::warn!(
                head_id = ?input.head_id,
                member_ids = ?input.member_ids,
                "Project create rejected: unknown staff reference"
            );
            AppError::Core(CoreError::Validation(
                "Project head or member refers to a staff member that does not exist".into(),
            ))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(
        project_id = id,
        member_count = input.member_ids.as_ref().map_or(0, Vec::len),
        "Project created"
    );
    Ok(Json(CreatedResponse::new(id)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_id(&raw_id, "Project").inspect_err(|_| {
        tracing::warn!(raw_id = %raw_id, "Rejected project delete: invalid id");
    })?;

    tracing::info!(project_id = id, "Deleting project");

    let deleted = ProjectRepo::delete(&state.pool, id).await.inspect_err(|e| {
        tracing::error!(project_id = id, error = %e, "Project delete failed");
    })?;

    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(Json(SuccessResponse::ok()))
    } else {
        tracing::warn!(project_id = id, "Project not found for deletion");
        Err(CoreError::NotFound {
            entity: "Project",
            id,
        }
        .into())
    }
}
