//! Hospital service entity.

use chrono::{DateTime, Utc};

/// A service the hospital advertises (e.g., "24/7 Emergency").
///
/// Service names are unique. Soft-deleted via `is_active`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new service.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Partial update for an existing service. `None` fields are unchanged.
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub is_active: Option<bool>,
}
