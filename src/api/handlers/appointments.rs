//! Handlers for appointment endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::appointment::{
    AppointmentItem, AppointmentListParams, AppointmentListResponse, CreateAppointmentRequest,
    UpdateAppointmentRequest,
};
use crate::domain::entities::{Appointment, AppointmentStatus, Department, Doctor};
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Rejects bookings into departments that do not exist or are inactive.
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

/// Rejects bookings with a missing or unavailable doctor.
async fn check_doctor(state: &AppState, doctor_id: i32) -> Result<(), AppError> {
    let doctor = state
        .repo::<Doctor>()
        .get(doctor_id)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(
                "Referenced doctor does not exist",
                json!({ "doctor_id": doctor_id }),
            )
        })?;

    if !doctor.is_available {
        return Err(AppError::bad_request(
            "Doctor is not accepting appointments",
            json!({ "doctor_id": doctor_id }),
        ));
    }

    Ok(())
}

/// Lists appointments with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/v1/appointments?status=&doctor_id=&department_id=&appointment_date=`
pub async fn appointment_list_handler(
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParams>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if let Some(status) = params.status.as_deref() {
        let status = AppointmentStatus::parse(status).ok_or_else(|| {
            AppError::bad_request(
                "Unknown appointment status",
                json!({ "status": status, "allowed": ["confirmed", "completed", "cancelled"] }),
            )
        })?;
        filters = filters.eq("status", status.as_str());
    }
    if let Some(doctor_id) = params.doctor_id {
        filters = filters.eq("doctor_id", doctor_id);
    }
    if let Some(department_id) = params.department_id {
        filters = filters.eq("department_id", department_id);
    }
    if let Some(date) = params.appointment_date {
        filters = filters.eq("appointment_date", date);
    }

    let page = state.repo::<Appointment>().list(window, &filters).await?;

    Ok(Json(AppointmentListResponse {
        items: page.items.into_iter().map(AppointmentItem::from).collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single appointment by id.
///
/// # Endpoint
///
/// `GET /api/v1/appointments/{id}`
pub async fn appointment_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<AppointmentItem>, AppError> {
    let appointment = state
        .repo::<Appointment>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Appointment not found", json!({ "id": id })))?;

    Ok(Json(AppointmentItem::from(appointment)))
}

/// Books an appointment. Public; status starts as `confirmed`.
///
/// # Endpoint
///
/// `POST /api/v1/appointments`
///
/// # Errors
///
/// Returns 400 on invalid input, a missing department, or an unavailable
/// doctor.
pub async fn appointment_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentItem>), AppError> {
    payload.validate()?;

    check_department(&state, payload.department_id).await?;
    if let Some(doctor_id) = payload.doctor_id {
        check_doctor(&state, doctor_id).await?;
    }

    let appointment = state
        .repo::<Appointment>()
        .create(payload.into_new())
        .await?;

    Ok((StatusCode::CREATED, Json(AppointmentItem::from(appointment))))
}

/// Partially updates an appointment.
///
/// # Endpoint
///
/// `PATCH /api/v1/appointments/{id}`
///
/// Cancellation is `{"status": "cancelled"}`; `doctor_id: null` unassigns
/// the doctor.
pub async fn appointment_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Json<AppointmentItem>, AppError> {
    if let Some(Some(doctor_id)) = payload.doctor_id {
        check_doctor(&state, doctor_id).await?;
    }

    let patch = payload.into_patch()?;

    let appointment = state.repo::<Appointment>().update(id, patch).await?;

    Ok(Json(AppointmentItem::from(appointment)))
}

/// Removes an appointment record entirely.
///
/// # Endpoint
///
/// `DELETE /api/v1/appointments/{id}`
pub async fn appointment_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<Appointment>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Appointment not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
