//! Handlers for blood bank endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::blood_bank::{
    BloodBankItem, BloodBankListParams, BloodBankListResponse, CreateBloodBankRequest,
    UpdateBloodBankRequest,
};
use crate::domain::entities::{BloodBank, BloodGroup};
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Lists blood banks with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/v1/blood-banks?blood_group=&active_only=&available_24_7=`
///
/// With `blood_group` set, only active banks holding at least one unit of
/// that group are returned. An unrecognized group key (anything outside
/// `O+ O- A+ A- B+ B- AB+ AB-`) yields an empty page, not an error.
pub async fn blood_bank_list_handler(
    State(state): State<AppState>,
    Query(params): Query<BloodBankListParams>,
) -> Result<Json<BloodBankListResponse>, AppError> {
    let window = params.page.window()?;

    if let Some(key) = params.blood_group.as_deref() {
        let page = match BloodGroup::parse(key) {
            Some(group) => {
                state
                    .repo::<BloodBank>()
                    .list_by_blood_group(group, window)
                    .await?
            }
            None => crate::domain::repository::Page {
                items: vec![],
                total: 0,
            },
        };

        return Ok(Json(BloodBankListResponse {
            items: page.items.into_iter().map(BloodBankItem::from).collect(),
            total: page.total,
            skip: window.skip(),
            limit: window.limit(),
        }));
    }

    let mut filters = FilterSet::new();
    if params.active_only.unwrap_or(true) {
        filters = filters.eq("is_active", true);
    }
    if let Some(available_24_7) = params.available_24_7 {
        filters = filters.eq("available_24_7", available_24_7);
    }

    let page = state.repo::<BloodBank>().list(window, &filters).await?;

    Ok(Json(BloodBankListResponse {
        items: page.items.into_iter().map(BloodBankItem::from).collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single blood bank by id.
///
/// # Endpoint
///
/// `GET /api/v1/blood-banks/{id}`
pub async fn blood_bank_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<BloodBankItem>, AppError> {
    let bank = state
        .repo::<BloodBank>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Blood bank not found", json!({ "id": id })))?;

    Ok(Json(BloodBankItem::from(bank)))
}

/// Creates a blood bank.
///
/// # Endpoint
///
/// `POST /api/v1/blood-banks`
///
/// # Errors
///
/// Returns 400 on invalid input, 409 if the name is already taken.
pub async fn blood_bank_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBloodBankRequest>,
) -> Result<(StatusCode, Json<BloodBankItem>), AppError> {
    payload.validate()?;

    let repo = state.repo::<BloodBank>();

    if repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::conflict(
            "Blood bank with this name already exists",
            json!({ "name": payload.name }),
        ));
    }

    let bank = repo.create(payload.into_new()).await?;

    Ok((StatusCode::CREATED, Json(BloodBankItem::from(bank))))
}

/// Partially updates a blood bank, including inventory counts.
///
/// # Endpoint
///
/// `PATCH /api/v1/blood-banks/{id}`
pub async fn blood_bank_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBloodBankRequest>,
) -> Result<Json<BloodBankItem>, AppError> {
    payload.validate()?;

    let repo = state.repo::<BloodBank>();

    if let Some(name) = &payload.name
        && let Some(existing) = repo.find_by_name(name).await?
        && existing.id != id
    {
        return Err(AppError::conflict(
            "Blood bank with this name already exists",
            json!({ "name": name }),
        ));
    }

    let bank = repo.update(id, payload.into_patch()).await?;

    Ok(Json(BloodBankItem::from(bank)))
}

/// Deactivates a blood bank (soft delete).
///
/// # Endpoint
///
/// `DELETE /api/v1/blood-banks/{id}`
pub async fn blood_bank_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<BloodBank>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Blood bank not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
