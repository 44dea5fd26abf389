//! Ambulance service entity.

use chrono::{DateTime, Utc};

/// An ambulance service provider with contact and location details.
///
/// Names are unique. Soft-deleted via `is_active`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AmbulanceService {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub phone: String,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub available_24_7: bool,
    pub ambulance_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new ambulance service.
#[derive(Debug, Clone)]
pub struct NewAmbulanceService {
    pub name: String,
    pub description: Option<String>,
    pub phone: String,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub available_24_7: bool,
    pub ambulance_count: i32,
}

/// Partial update for an existing ambulance service.
#[derive(Debug, Clone, Default)]
pub struct AmbulanceServicePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub phone: Option<String>,
    pub location: Option<Option<String>>,
    pub latitude: Option<Option<String>>,
    pub longitude: Option<Option<String>>,
    pub available_24_7: Option<bool>,
    pub ambulance_count: Option<i32>,
    pub is_active: Option<bool>,
}
