pub mod auth;
pub mod dashboard;
pub mod distribution;
pub mod health;
pub mod project;
pub mod staff;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login
/// /auth/create                create account
///
/// /staff                      list, create
/// /staff/{id}                 delete (cascades memberships, clears head)
///
/// /projects                   list (with head_name + members), create
/// /projects/{id}              delete (cascades memberships)
///
/// /distribution               AI task distribution (POST)
///
/// /dashboard                  summary counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/staff", staff::router())
        .nest("/projects", project::router())
        .nest("/distribution", distribution::router())
        .nest("/dashboard", dashboard::router())
}
