//! Handlers for the `/auth` resource (login, account creation).

use axum::extract::State;
use axum::Json;
use nexa_core::error::CoreError;
use nexa_core::types::DbId;
use nexa_db::models::user::CreateUser;
use nexa_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::CreatedResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/create`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
}

/// Same message for unknown user and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with username + password.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %input.username, "Login failed: unknown user");
            AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)?;

    if !password_valid {
        tracing::warn!(user_id = user.id, "Login failed: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
    }))
}

/// POST /api/auth/create
///
/// Register a new account. A taken username is rejected with 400.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAccountRequest>,
) -> AppResult<Json<CreatedResponse>> {
    let password_hash = hash_password(&input.password)?;

    let new_user = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };

    let user = UserRepo::create(&state.pool, &new_user)
        .await
        .map_err(|e| {
            if nexa_db::is_unique_violation(&e) {
                tracing::warn!(username = %new_user.username, "Account creation rejected: username taken");
                AppError::Core(CoreError::DuplicateUsername(new_user.username.clone()))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "Account created");

    Ok(Json(CreatedResponse::new(user.id)))
}
