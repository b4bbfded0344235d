//! Handler for AI-assisted task distribution.

use axum::extract::State;
use axum::Json;
use nexa_db::repositories::StaffRepo;
use nexa_gemini::RosterEntry;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Request body for `POST /distribution`.
#[derive(Debug, Deserialize, Validate)]
pub struct DistributionRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub project_description: String,
}

/// Markdown recommendation, or the fixed fallback text when the model call
/// failed.
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub success: bool,
    pub analysis: String,
}

/// POST /api/distribution
///
/// Reads the current staff roster and asks the advisor to distribute the
/// described project's work across it. Model failures still answer 200.
pub async fn analyze(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DistributionRequest>,
) -> AppResult<Json<DistributionResponse>> {
    let staff = StaffRepo::list(&state.pool).await?;
    let roster: Vec<RosterEntry<'_>> = staff
        .iter()
        .map(|s| RosterEntry {
            name: &s.name,
            skills: &s.skills,
            languages: &s.languages,
        })
        .collect();

    let analysis = state
        .advisor
        .analyze(&input.project_description, &roster)
        .await;

    Ok(Json(DistributionResponse {
        success: true,
        analysis,
    }))
}
