use axum::routing::post;
use axum::Router;

use crate::handlers::distribution;
use crate::state::AppState;

/// Routes mounted at `/distribution`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(distribution::analyze))
}
