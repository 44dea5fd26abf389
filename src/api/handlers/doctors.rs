//! Handlers for doctor endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::doctor::{
    CreateDoctorRequest, DoctorItem, DoctorListParams, DoctorListResponse, UpdateDoctorRequest,
};
use crate::domain::entities::{Department, Doctor};
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Rejects references to departments that do not exist or are inactive.
async fn check_department(state: &AppState, department_id: i32) -> Result<(), AppError> {
    let department = state.repo::<Department>().get(department_id).await?;

    match department {
        Some(d) if d.is_active => Ok(()),
        _ => Err(AppError::bad_request(
            "Referenced department does not exist",
            json!({ "department_id": department_id }),
        )),
    }
}

/// Lists doctors with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/v1/doctors?department_id=&specialty=&available_only=`
pub async fn doctor_list_handler(
    State(state): State<AppState>,
    Query(params): Query<DoctorListParams>,
) -> Result<Json<DoctorListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if let Some(department_id) = params.department_id {
        filters = filters.eq("department_id", department_id);
    }
    if let Some(specialty) = params.specialty {
        filters = filters.eq("specialty", specialty);
    }
    if params.available_only.unwrap_or(false) {
        filters = filters.eq("is_available", true);
    }

    let page = state.repo::<Doctor>().list(window, &filters).await?;

    Ok(Json(DoctorListResponse {
        items: page.items.into_iter().map(DoctorItem::from).collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single doctor by id.
///
/// # Endpoint
///
/// `GET /api/v1/doctors/{id}`
pub async fn doctor_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DoctorItem>, AppError> {
    let doctor = state
        .repo::<Doctor>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Doctor not found", json!({ "id": id })))?;

    Ok(Json(DoctorItem::from(doctor)))
}

/// Creates a doctor.
///
/// # Endpoint
///
/// `POST /api/v1/doctors`
///
/// # Errors
///
/// Returns 400 on invalid input or when the department does not exist.
pub async fn doctor_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<DoctorItem>), AppError> {
    payload.validate()?;

    check_department(&state, payload.department_id).await?;

    let doctor = state.repo::<Doctor>().create(payload.into_new()).await?;

    Ok((StatusCode::CREATED, Json(DoctorItem::from(doctor))))
}

/// Partially updates a doctor.
///
/// # Endpoint
///
/// `PATCH /api/v1/doctors/{id}`
pub async fn doctor_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateDoctorRequest>,
) -> Result<Json<DoctorItem>, AppError> {
    payload.validate()?;

    if let Some(department_id) = payload.department_id {
        check_department(&state, department_id).await?;
    }

    let doctor = state.repo::<Doctor>().update(id, payload.into_patch()).await?;

    Ok(Json(DoctorItem::from(doctor)))
}

/// Removes a doctor.
///
/// # Endpoint
///
/// `DELETE /api/v1/doctors/{id}`
///
/// This is a hard delete; appointments referencing the doctor keep their
/// row with `doctor_id` set to null.
pub async fn doctor_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<Doctor>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found("Doctor not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}
