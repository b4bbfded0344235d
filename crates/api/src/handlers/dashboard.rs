//! Handler for the dashboard summary.

use axum::extract::State;
use axum::Json;
use nexa_db::models::dashboard::DashboardStats;
use nexa_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
