//! Tests for the Bearer token middleware in front of write endpoints.

mod common;

use axum::{Router, middleware, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use hospital_api::api::handlers::department_create_handler;
use hospital_api::api::middleware::auth;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/v1/departments", post(department_create_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_missing_token_is_401(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/departments")
        .json(&json!({ "name": "Cardiology" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get("WWW-Authenticate").unwrap(),
        "Bearer"
    );
}

#[sqlx::test]
async fn test_invalid_token_is_401(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/departments")
        .authorization_bearer("not-a-real-token")
        .json(&json!({ "name": "Cardiology" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_valid_token_passes(pool: PgPool) {
    let server = make_server(pool.clone());

    let token = common::create_test_token(&pool, "admin").await;

    let response = server
        .post("/api/v1/departments")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Cardiology" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[sqlx::test]
async fn test_revoked_token_is_401(pool: PgPool) {
    let server = make_server(pool.clone());

    let token = common::create_test_token(&pool, "old-admin").await;
    sqlx::query("UPDATE api_tokens SET revoked_at = NOW() WHERE name = 'old-admin'")
        .execute(&pool)
        .await
        .unwrap();

    let response = server
        .post("/api/v1/departments")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Cardiology" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}
