//! Handlers for ambulance service endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::ambulance_service::{
    AmbulanceServiceItem, AmbulanceServiceListParams, AmbulanceServiceListResponse,
    CreateAmbulanceServiceRequest, UpdateAmbulanceServiceRequest,
};
use crate::domain::entities::AmbulanceService;
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Lists ambulance services with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/v1/ambulance-services?active_only=&available_24_7=`
pub async fn ambulance_service_list_handler(
    State(state): State<AppState>,
    Query(params): Query<AmbulanceServiceListParams>,
) -> Result<Json<AmbulanceServiceListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if params.active_only.unwrap_or(true) {
        filters = filters.eq("is_active", true);
    }
    if let Some(available_24_7) = params.available_24_7 {
        filters = filters.eq("available_24_7", available_24_7);
    }

    let page = state
        .repo::<AmbulanceService>()
        .list(window, &filters)
        .await?;

    Ok(Json(AmbulanceServiceListResponse {
        items: page
            .items
            .into_iter()
            .map(AmbulanceServiceItem::from)
            .collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single ambulance service by id.
///
/// # Endpoint
///
/// `GET /api/v1/ambulance-services/{id}`
pub async fn ambulance_service_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<AmbulanceServiceItem>, AppError> {
    let service = state
        .repo::<AmbulanceService>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Ambulance service not found", json!({ "id": id })))?;

    Ok(Json(AmbulanceServiceItem::from(service)))
}

/// Creates an ambulance service.
///
/// # Endpoint
///
/// `POST /api/v1/ambulance-services`
pub async fn ambulance_service_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAmbulanceServiceRequest>,
) -> Result<(StatusCode, Json<AmbulanceServiceItem>), AppError> {
    payload.validate()?;

    let repo = state.repo::<AmbulanceService>();

    if repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::conflict(
            "Ambulance service with this name already exists",
            json!({ "name": payload.name }),
        ));
    }

    let service = repo.create(payload.into_new()).await?;

    Ok((StatusCode::CREATED, Json(AmbulanceServiceItem::from(service))))
}

/// Partially updates an ambulance service.
///
/// # Endpoint
///
/// `PATCH /api/v1/ambulance-services/{id}`
pub async fn ambulance_service_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAmbulanceServiceRequest>,
) -> Result<Json<AmbulanceServiceItem>, AppError> {
    payload.validate()?;

    let repo = state.repo::<AmbulanceService>();

    if let Some(name) = &payload.name
        && let Some(existing) = repo.find_by_name(name).await?
        && existing.id != id
    {
        return Err(AppError::conflict(
            "Ambulance service with this name already exists",
            json!({ "name": name }),
        ));
    }

    let service = repo.update(id, payload.into_patch()).await?;

    Ok(Json(AmbulanceServiceItem::from(service)))
}

/// Deactivates an ambulance service (soft delete).
///
/// # Endpoint
///
/// `DELETE /api/v1/ambulance-services/{id}`
pub async fn ambulance_service_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<AmbulanceService>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Ambulance service not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
