//! Handler tests for the appointment endpoints.

mod common;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use hospital_api::api::handlers::{
    appointment_create_handler, appointment_delete_handler, appointment_get_handler,
    appointment_list_handler, appointment_update_handler,
};

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/v1/appointments", get(appointment_list_handler))
        .route("/api/v1/appointments", post(appointment_create_handler))
        .route("/api/v1/appointments/{id}", get(appointment_get_handler))
        .route(
            "/api/v1/appointments/{id}",
            patch(appointment_update_handler),
        )
        .route(
            "/api/v1/appointments/{id}",
            delete(appointment_delete_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn booking(department_id: i32) -> serde_json::Value {
    json!({
        "patient_name": "Jamila Khatun",
        "patient_phone": "01712345678",
        "department_id": department_id,
        "appointment_date": "2026-09-15",
        "appointment_time": "10:30:00"
    })
}

#[sqlx::test]
async fn test_booking_starts_confirmed(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_test_department(&pool, "Cardiology").await;

    let response = server
        .post("/api/v1/appointments")
        .json(&booking(dept))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["patient_name"], "Jamila Khatun");
    assert!(body["doctor_id"].is_null());
}

#[sqlx::test]
async fn test_booking_with_doctor(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_test_department(&pool, "Cardiology").await;
    let doctor = common::create_test_doctor(&pool, "Dr. Rahman", dept).await;

    let mut payload = booking(dept);
    payload["doctor_id"] = json!(doctor);

    let response = server.post("/api/v1/appointments").json(&payload).await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["doctor_id"], doctor);
}

#[sqlx::test]
async fn test_booking_into_missing_department_is_400(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/appointments")
        .json(&booking(424242))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_booking_into_inactive_department_is_400(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_inactive_department(&pool, "Closed").await;

    let response = server
        .post("/api/v1/appointments")
        .json(&booking(dept))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_cancellation_is_a_status_change(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_test_department(&pool, "Cardiology").await;
    let created = server
        .post("/api/v1/appointments")
        .json(&booking(dept))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/v1/appointments/{id}"))
        .json(&json!({ "status": "cancelled" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "cancelled");

    // The record is still there; cancellation does not delete.
    let get = server.get(&format!("/api/v1/appointments/{id}")).await;
    get.assert_status_ok();
}

#[sqlx::test]
async fn test_unknown_status_is_400(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_test_department(&pool, "Cardiology").await;
    let created = server
        .post("/api/v1/appointments")
        .json(&booking(dept))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/v1/appointments/{id}"))
        .json(&json!({ "status": "pending" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_list_filter_by_status(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_test_department(&pool, "Cardiology").await;
    for _ in 0..2 {
        server
            .post("/api/v1/appointments")
            .json(&booking(dept))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let confirmed = server.get("/api/v1/appointments?status=confirmed").await;
    confirmed.assert_status_ok();
    assert_eq!(confirmed.json::<serde_json::Value>()["total"], 2);

    let cancelled = server.get("/api/v1/appointments?status=cancelled").await;
    cancelled.assert_status_ok();
    assert_eq!(cancelled.json::<serde_json::Value>()["total"], 0);

    let bogus = server.get("/api/v1/appointments?status=bogus").await;
    bogus.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_delete_removes_record(pool: PgPool) {
    let server = make_server(pool.clone());

    let dept = common::create_test_department(&pool, "Cardiology").await;
    let created = server
        .post("/api/v1/appointments")
        .json(&booking(dept))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server.delete(&format!("/api/v1/appointments/{id}")).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let get = server.get(&format!("/api/v1/appointments/{id}")).await;
    get.assert_status(axum::http::StatusCode::NOT_FOUND);
}
