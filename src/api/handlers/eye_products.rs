//! Handlers for eye-care product endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::eye_product::{
    CreateEyeProductRequest, EyeProductItem, EyeProductListParams, EyeProductListResponse,
    UpdateEyeProductRequest,
};
use crate::domain::entities::EyeProduct;
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Lists eye products with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/v1/eye-products?category=&brand=&available_only=&active_only=`
pub async fn eye_product_list_handler(
    State(state): State<AppState>,
    Query(params): Query<EyeProductListParams>,
) -> Result<Json<EyeProductListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if let Some(category) = params.category {
        filters = filters.eq("category", category);
    }
    if let Some(brand) = params.brand {
        filters = filters.eq("brand", brand);
    }
    if params.available_only.unwrap_or(false) {
        filters = filters.eq("is_available", true);
    }
    if params.active_only.unwrap_or(true) {
        filters = filters.eq("is_active", true);
    }

    let page = state.repo::<EyeProduct>().list(window, &filters).await?;

    Ok(Json(EyeProductListResponse {
        items: page.items.into_iter().map(EyeProductItem::from).collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single eye product by id.
///
/// # Endpoint
///
/// `GET /api/v1/eye-products/{id}`
pub async fn eye_product_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<EyeProductItem>, AppError> {
    let product = state
        .repo::<EyeProduct>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;

    Ok(Json(EyeProductItem::from(product)))
}

/// Creates an eye product.
///
/// # Endpoint
///
/// `POST /api/v1/eye-products`
pub async fn eye_product_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateEyeProductRequest>,
) -> Result<(StatusCode, Json<EyeProductItem>), AppError> {
    payload.validate()?;

    let product = state
        .repo::<EyeProduct>()
        .create(payload.into_new())
        .await?;

    Ok((StatusCode::CREATED, Json(EyeProductItem::from(product))))
}

/// Partially updates an eye product.
///
/// # Endpoint
///
/// `PATCH /api/v1/eye-products/{id}`
pub async fn eye_product_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateEyeProductRequest>,
) -> Result<Json<EyeProductItem>, AppError> {
    payload.validate()?;

    let product = state
        .repo::<EyeProduct>()
        .update(id, payload.into_patch())
        .await?;

    Ok(Json(EyeProductItem::from(product)))
}

/// Deactivates an eye product (soft delete).
///
/// # Endpoint
///
/// `DELETE /api/v1/eye-products/{id}`
pub async fn eye_product_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<EyeProduct>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Product not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
