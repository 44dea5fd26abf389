//! Handlers for department endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::department::{
    CreateDepartmentRequest, DepartmentItem, DepartmentListParams, DepartmentListResponse,
    UpdateDepartmentRequest,
};
use crate::domain::entities::Department;
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Lists departments with pagination; inactive rows are excluded unless
/// `active_only=false`.
///
/// # Endpoint
///
/// `GET /api/v1/departments`
pub async fn department_list_handler(
    State(state): State<AppState>,
    Query(params): Query<DepartmentListParams>,
) -> Result<Json<DepartmentListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if params.active_only.unwrap_or(true) {
        filters = filters.eq("is_active", true);
    }

    let page = state.repo::<Department>().list(window, &filters).await?;

    Ok(Json(DepartmentListResponse {
        items: page.items.into_iter().map(DepartmentItem::from).collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single department by id.
///
/// # Endpoint
///
/// `GET /api/v1/departments/{id}`
pub async fn department_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DepartmentItem>, AppError> {
    let department = state
        .repo::<Department>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Department not found", json!({ "id": id })))?;

    Ok(Json(DepartmentItem::from(department)))
}

/// Creates a department.
///
/// # Endpoint
///
/// `POST /api/v1/departments`
///
/// # Errors
///
/// Returns 400 on invalid input, 409 if the name is already taken.
pub async fn department_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentItem>), AppError> {
    payload.validate()?;

    let repo = state.repo::<Department>();

    if repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::conflict(
            "Department with this name already exists",
            json!({ "name": payload.name }),
        ));
    }

    let department = repo.create(payload.into_new()).await?;

    Ok((StatusCode::CREATED, Json(DepartmentItem::from(department))))
}

/// Partially updates a department.
///
/// # Endpoint
///
/// `PATCH /api/v1/departments/{id}`
///
/// Absent fields are unchanged; `description: null` clears the description.
pub async fn department_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> Result<Json<DepartmentItem>, AppError> {
    payload.validate()?;

    let repo = state.repo::<Department>();

    if let Some(name) = &payload.name
        && let Some(existing) = repo.find_by_name(name).await?
        && existing.id != id
    {
        return Err(AppError::conflict(
            "Department with this name already exists",
            json!({ "name": name }),
        ));
    }

    let department = repo.update(id, payload.into_patch()).await?;

    Ok(Json(DepartmentItem::from(department)))
}

/// Deactivates a department (soft delete).
///
/// # Endpoint
///
/// `DELETE /api/v1/departments/{id}`
///
/// Returns 204 on success, 404 if no active department matched.
pub async fn department_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<Department>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Department not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
