//! Handler tests for the blood bank endpoints, including the blood-group
//! inventory lookup and its leniency toward unknown group keys.

mod common;

use axum::{
    Router,
    routing::{get, patch, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use hospital_api::api::handlers::{
    blood_bank_create_handler, blood_bank_get_handler, blood_bank_list_handler,
    blood_bank_update_handler,
};

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/v1/blood-banks", get(blood_bank_list_handler))
        .route("/api/v1/blood-banks", post(blood_bank_create_handler))
        .route("/api/v1/blood-banks/{id}", get(blood_bank_get_handler))
        .route("/api/v1/blood-banks/{id}", patch(blood_bank_update_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_list_by_blood_group(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_blood_bank(&pool, "Stocked", 10).await;
    common::create_test_blood_bank(&pool, "Empty", 0).await;

    let response = server.get("/api/v1/blood-banks?blood_group=O%2B").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Stocked");
    assert_eq!(body["items"][0]["blood_group_o_positive"], 10);
}

#[sqlx::test]
async fn test_unknown_blood_group_yields_empty_page(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_blood_bank(&pool, "Stocked", 10).await;

    // Not an error: an unrecognized group key simply matches nothing.
    let response = server.get("/api/v1/blood-banks?blood_group=XYZ").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_blood_group_lookup_skips_inactive_banks(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_inactive_blood_bank(&pool, "Closed", 99).await;

    let response = server.get("/api/v1/blood-banks?blood_group=O%2B").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total"], 0);
}

#[sqlx::test]
async fn test_plain_list_excludes_inactive_by_default(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_blood_bank(&pool, "Open", 1).await;
    common::create_inactive_blood_bank(&pool, "Closed", 1).await;

    let response = server.get("/api/v1/blood-banks").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Open");

    let all = server.get("/api/v1/blood-banks?active_only=false").await;
    all.assert_status_ok();
    assert_eq!(all.json::<serde_json::Value>()["total"], 2);
}

#[sqlx::test]
async fn test_create_with_inventory(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/blood-banks")
        .json(&json!({
            "name": "Central Blood Bank",
            "phone": "01711111111",
            "blood_group_o_positive": 25,
            "blood_group_ab_negative": 2,
            "available_24_7": true
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["blood_group_o_positive"], 25);
    assert_eq!(body["blood_group_ab_negative"], 2);
    // Unspecified groups default to zero units.
    assert_eq!(body["blood_group_b_positive"], 0);
    assert_eq!(body["available_24_7"], true);
}

#[sqlx::test]
async fn test_create_negative_inventory_is_400(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/blood-banks")
        .json(&json!({
            "name": "Bad Bank",
            "phone": "01711111111",
            "blood_group_o_positive": -5
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_update_inventory_count(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_blood_bank(&pool, "Refill", 1).await;

    let response = server
        .patch(&format!("/api/v1/blood-banks/{id}"))
        .json(&json!({ "blood_group_o_positive": 40 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["blood_group_o_positive"], 40);
    assert_eq!(body["name"], "Refill");
}
