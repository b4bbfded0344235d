//! HTTP-level integration tests for login and account creation.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use nexa_api::auth::password::hash_password;
use nexa_db::models::user::CreateUser;
use nexa_db::repositories::UserRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a user directly and return its id.
async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@nexa.test"),
        password_hash: hash_password(password).expect("hashing should succeed"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: SqlitePool) {
    let id = create_test_user(&pool, "admin", "s3cret").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": "admin", "password": "s3cret"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["user"]["id"], id);
    assert_eq!(json["user"]["username"], "admin");
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: SqlitePool) {
    create_test_user(&pool, "admin", "s3cret").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": "admin", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": "ghost", "password": "x"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_username_is_case_sensitive(pool: SqlitePool) {
    create_test_user(&pool, "Admin", "s3cret").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": "admin", "password": "s3cret"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Account creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_account_then_login(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/create",
        serde_json::json!({"username": "newbie", "password": "pw123", "email": "n@nexa.test"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().unwrap();

    let stored = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "pw123");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": "newbie", "password": "pw123"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_returns_400(pool: SqlitePool) {
    create_test_user(&pool, "admin", "first").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/create",
        serde_json::json!({"username": "admin", "password": "second"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "DUPLICATE_USERNAME");
    assert_eq!(json["error"], "Username already exists");

    assert_eq!(UserRepo::count_by_username(&pool, "admin").await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_account_requires_username(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/create",
        serde_json::json!({"username": "", "password": "pw"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
