//! HTTP-level integration tests for the staff endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_staff, delete, get, post_json, staff_payload};
use nexa_db::repositories::{ProjectRepo, StaffRepo};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_staff_empty(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/staff").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_staff_then_list(pool: SqlitePool) {
    let mut payload = staff_payload("Asha");
    payload["image"] = serde_json::json!("data:image/png;base64,AAAA");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/staff", payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/staff").await).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], id);
    assert_eq!(rows[0]["name"], "Asha");
    assert_eq!(rows[0]["skills"], "Rust, SQL");
    assert_eq!(rows[0]["father_name"], "Father");
    assert_eq!(rows[0]["pincode"], "560001");
    assert_eq!(rows[0]["image"], "data:image/png;base64,AAAA");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_staff_without_image_defaults_empty(pool: SqlitePool) {
    let id = create_staff(&pool, "Ravi").await;

    let staff = StaffRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(staff.image, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_staff_missing_field_returns_400(pool: SqlitePool) {
    let mut payload = staff_payload("Asha");
    payload.as_object_mut().unwrap().remove("email");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/staff", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
    assert!(StaffRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_staff_blank_field_returns_400(pool: SqlitePool) {
    let mut payload = staff_payload("Asha");
    payload["city"] = serde_json::json!("");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/staff", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("city"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_staff(pool: SqlitePool) {
    let id = create_staff(&pool, "Asha").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/staff/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
    assert!(StaffRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_staff_non_numeric_id_returns_400(pool: SqlitePool) {
    create_staff(&pool, "Asha").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/staff/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid staff ID: abc");
    assert_eq!(StaffRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_staff_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/staff/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Staff with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_head_clears_project_head(pool: SqlitePool) {
    let head = create_staff(&pool, "Head").await;
    let member = create_staff(&pool, "Member").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/projects",
        serde_json::json!({
            "name": "Portal",
            "description": "Admin portal",
            "head_id": head,
            "completion_date": "2026-12-31",
            "member_ids": [head, member],
        }),
    )
    .await;
    let project_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/staff/{head}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .expect("project survives its head");
    assert_eq!(project.head_id, None);
    assert_eq!(project.head_name, None);

    let members = ProjectRepo::list_members(&pool, project_id).await.unwrap();
    let member_ids: Vec<i64> = members.iter().map(|s| s.id).collect();
    assert_eq!(member_ids, vec![member]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_staff_with_large_inline_image(pool: SqlitePool) {
    // Three MiB of base64 is past axum's stock 2 MiB body limit.
    let image = format!("data:image/png;base64,{}", "A".repeat(3 * 1024 * 1024));
    let mut payload = staff_payload("Asha");
    payload["image"] = serde_json::json!(image);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/staff", payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"].as_i64().unwrap();
    let stored = StaffRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.image, image);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_body_over_configured_limit_is_rejected(pool: SqlitePool) {
    let mut config = common::test_config();
    config.max_body_bytes = 1024;
    let mut payload = staff_payload("Asha");
    payload["image"] = serde_json::json!("A".repeat(4096));

    let app = common::build_app_with_config(pool.clone(), config);
    let response = post_json(app, "/api/staff", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
    assert!(StaffRepo::list(&pool).await.unwrap().is_empty());
}
