//! Handlers for hospital service endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::service::{
    CreateServiceRequest, ServiceItem, ServiceListParams, ServiceListResponse,
    UpdateServiceRequest,
};
use crate::domain::entities::Service;
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Lists services with pagination; inactive rows are excluded unless
/// `active_only=false`.
///
/// # Endpoint
///
/// `GET /api/v1/services`
pub async fn service_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> Result<Json<ServiceListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if params.active_only.unwrap_or(true) {
        filters = filters.eq("is_active", true);
    }

    let page = state.repo::<Service>().list(window, &filters).await?;

    Ok(Json(ServiceListResponse {
        items: page.items.into_iter().map(ServiceItem::from).collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single service by id.
///
/// # Endpoint
///
/// `GET /api/v1/services/{id}`
pub async fn service_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ServiceItem>, AppError> {
    let service = state
        .repo::<Service>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Service not found", json!({ "id": id })))?;

    Ok(Json(ServiceItem::from(service)))
}

/// Creates a service.
///
/// # Endpoint
///
/// `POST /api/v1/services`
///
/// # Errors
///
/// Returns 400 on invalid input, 409 if the name is already taken.
pub async fn service_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceItem>), AppError> {
    payload.validate()?;

    let repo = state.repo::<Service>();

    if repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::conflict(
            "Service with this name already exists",
            json!({ "name": payload.name }),
        ));
    }

    let service = repo.create(payload.into_new()).await?;

    Ok((StatusCode::CREATED, Json(ServiceItem::from(service))))
}

/// Partially updates a service.
///
/// # Endpoint
///
/// `PATCH /api/v1/services/{id}`
pub async fn service_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<ServiceItem>, AppError> {
    payload.validate()?;

    let repo = state.repo::<Service>();

    if let Some(name) = &payload.name
        && let Some(existing) = repo.find_by_name(name).await?
        && existing.id != id
    {
        return Err(AppError::conflict(
            "Service with this name already exists",
            json!({ "name": name }),
        ));
    }

    let service = repo.update(id, payload.into_patch()).await?;

    Ok(Json(ServiceItem::from(service)))
}

/// Deactivates a service (soft delete).
///
/// # Endpoint
///
/// `DELETE /api/v1/services/{id}`
pub async fn service_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<Service>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Service not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
