#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use hospital_api::application::services::hash_token;
use hospital_api::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SIGNING_SECRET.to_string())
}

pub async fn create_test_department(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO departments (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_inactive_department(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO departments (name, is_active) VALUES ($1, FALSE) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_doctor(pool: &PgPool, name: &str, department_id: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO doctors (full_name, specialty, department_id) \
         VALUES ($1, 'Cardiology', $2) RETURNING id",
    )
    .bind(name)
    .bind(department_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_service(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO services (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a blood bank with the given O+ inventory.
pub async fn create_test_blood_bank(pool: &PgPool, name: &str, o_positive: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO blood_banks (name, phone, blood_group_o_positive) \
         VALUES ($1, '01700000000', $2) RETURNING id",
    )
    .bind(name)
    .bind(o_positive)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_blood_bank(pool: &PgPool, name: &str, o_positive: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO blood_banks (name, phone, blood_group_o_positive, is_active) \
         VALUES ($1, '01700000000', $2, FALSE) RETURNING id",
    )
    .bind(name)
    .bind(o_positive)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Stores an API token and returns its raw value for Bearer headers.
pub async fn create_test_token(pool: &PgPool, name: &str) -> String {
    let raw = format!("test-token-{name}");
    let hash = hash_token(TEST_SIGNING_SECRET, &raw);

    sqlx::query("INSERT INTO api_tokens (name, token_hash) VALUES ($1, $2)")
        .bind(name)
        .bind(hash)
        .execute(pool)
        .await
        .unwrap();

    raw
}
