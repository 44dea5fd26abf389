//! Handler tests for the department endpoints.

mod common;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use hospital_api::api::handlers::{
    department_create_handler, department_delete_handler, department_get_handler,
    department_list_handler, department_update_handler,
};

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/v1/departments", get(department_list_handler))
        .route("/api/v1/departments", post(department_create_handler))
        .route("/api/v1/departments/{id}", get(department_get_handler))
        .route("/api/v1/departments/{id}", patch(department_update_handler))
        .route(
            "/api/v1/departments/{id}",
            delete(department_delete_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_structure(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_department(&pool, "Cardiology").await;
    common::create_test_department(&pool, "Neurology").await;

    let response = server.get("/api/v1/departments").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 2);
    assert_eq!(body["skip"], 0);
    assert_eq!(body["limit"], 10);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].get("name").is_some());
    assert!(items[0].get("is_active").is_some());
    assert!(items[0].get("created_at").is_some());
}

#[sqlx::test]
async fn test_list_pagination(pool: PgPool) {
    let server = make_server(pool.clone());

    for i in 1..=5 {
        common::create_test_department(&pool, &format!("Dept {i}")).await;
    }

    let response = server.get("/api/v1/departments?skip=3&limit=2").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 5);
    assert_eq!(body["skip"], 3);
    assert_eq!(body["limit"], 2);
}

#[sqlx::test]
async fn test_list_limit_out_of_range(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/v1/departments?limit=1000").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_list_excludes_inactive_by_default(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_department(&pool, "Open").await;
    common::create_inactive_department(&pool, "Closed").await;

    let response = server.get("/api/v1/departments").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Open");

    // Inactive rows come back only when explicitly requested.
    let all = server.get("/api/v1/departments?active_only=false").await;
    all.assert_status_ok();
    assert_eq!(all.json::<serde_json::Value>()["total"], 2);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_success(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_department(&pool, "Radiology").await;

    let response = server.get(&format!("/api/v1/departments/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Radiology");
}

#[sqlx::test]
async fn test_get_missing_is_404(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/v1/departments/424242").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/departments")
        .json(&json!({ "name": "Oncology", "description": "Cancer care" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Oncology");
    assert_eq!(body["description"], "Cancer care");
    assert_eq!(body["is_active"], true);
    assert!(body.get("id").is_some());
}

#[sqlx::test]
async fn test_create_duplicate_name_is_409(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_department(&pool, "Cardiology").await;

    let response = server
        .post("/api/v1/departments")
        .json(&json!({ "name": "Cardiology" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_empty_name_is_400(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/departments")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_partial(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_department(&pool, "Old Name").await;

    let response = server
        .patch(&format!("/api/v1/departments/{id}"))
        .json(&json!({ "name": "New Name" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "New Name");
}

#[sqlx::test]
async fn test_update_null_clears_description(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_department(&pool, "With Description").await;
    sqlx::query("UPDATE departments SET description = 'something' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let response = server
        .patch(&format!("/api/v1/departments/{id}"))
        .json(&json!({ "description": null }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["description"].is_null());
}

#[sqlx::test]
async fn test_update_rename_to_taken_name_is_409(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_department(&pool, "Taken").await;
    let id = common::create_test_department(&pool, "Renaming").await;

    let response = server
        .patch(&format!("/api/v1/departments/{id}"))
        .json(&json!({ "name": "Taken" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_update_missing_is_404(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .patch("/api/v1/departments/424242")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_deactivates(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_department(&pool, "Doomed").await;

    let response = server.delete(&format!("/api/v1/departments/{id}")).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // Soft delete: the record survives, flagged inactive.
    let get = server.get(&format!("/api/v1/departments/{id}")).await;
    get.assert_status_ok();
    assert_eq!(get.json::<serde_json::Value>()["is_active"], false);

    // A second delete finds no active record.
    let again = server.delete(&format!("/api/v1/departments/{id}")).await;
    again.assert_status(axum::http::StatusCode::NOT_FOUND);
}
