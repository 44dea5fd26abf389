//! DTOs for eye-care product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{EyeProduct, EyeProductPatch, NewEyeProduct};

/// Request body for `POST /api/v1/eye-products`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEyeProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    pub brand: Option<String>,
    pub price: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Stock quantity must be non-negative"))]
    #[serde(default)]
    pub stock_quantity: i32,

    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl CreateEyeProductRequest {
    pub fn into_new(self) -> NewEyeProduct {
        NewEyeProduct {
            name: self.name,
            description: self.description,
            category: self.category,
            brand: self.brand,
            price: self.price,
            image_url: self.image_url,
            stock_quantity: self.stock_quantity,
            is_available: self.is_available,
        }
    }
}

/// Request body for `PATCH /api/v1/eye-products/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEyeProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub brand: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,

    #[validate(range(min = 0, message = "Stock quantity must be non-negative"))]
    pub stock_quantity: Option<i32>,

    pub is_available: Option<bool>,

    pub is_active: Option<bool>,
}

impl UpdateEyeProductRequest {
    pub fn into_patch(self) -> EyeProductPatch {
        EyeProductPatch {
            name: self.name,
            description: self.description,
            category: self.category,
            brand: self.brand,
            price: self.price,
            image_url: self.image_url,
            stock_quantity: self.stock_quantity,
            is_available: self.is_available,
            is_active: self.is_active,
        }
    }
}

/// Query parameters for `GET /api/v1/eye-products`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct EyeProductListParams {
    #[serde(flatten)]
    pub page: PageParams,

    pub category: Option<String>,

    pub brand: Option<String>,

    /// Restrict to products currently in stock and purchasable.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub available_only: Option<bool>,

    /// Inactive products are excluded unless `active_only=false`.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active_only: Option<bool>,
}

/// An eye-care product as returned by the API.
#[derive(Debug, Serialize)]
pub struct EyeProductItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub stock_quantity: i32,
    pub is_available: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EyeProduct> for EyeProductItem {
    fn from(p: EyeProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            category: p.category,
            brand: p.brand,
            price: p.price,
            image_url: p.image_url,
            stock_quantity: p.stock_quantity,
            is_available: p.is_available,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/eye-products`.
#[derive(Debug, Serialize)]
pub struct EyeProductListResponse {
    pub items: Vec<EyeProductItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
