//! Eye-care product entity.

use chrono::{DateTime, Utc};

/// An eye-care product (sunglasses, contact lenses, drops, frames).
///
/// `is_available` tracks purchasability, `is_active` is the soft-delete
/// flag; the two are independent.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EyeProduct {
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

/// Input data for creating a new eye product.
#[derive(Debug, Clone)]
pub struct NewEyeProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub stock_quantity: i32,
    pub is_available: bool,
}

/// Partial update for an existing eye product.
#[derive(Debug, Clone, Default)]
pub struct EyeProductPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub brand: Option<Option<String>>,
    pub price: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub stock_quantity: Option<i32>,
    pub is_available: Option<bool>,
    pub is_active: Option<bool>,
}
