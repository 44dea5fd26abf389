//! Doctor entity.

use chrono::{DateTime, Utc};

/// A doctor attached to a department.
///
/// `is_available` reflects whether the doctor currently accepts
/// appointments; it is an availability toggle, not a deletion marker.
/// Doctors are hard-deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Doctor {
    pub id: i32,
    pub full_name: String,
    pub specialty: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub department_id: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new doctor.
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub full_name: String,
    pub specialty: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub department_id: i32,
}

/// Partial update for an existing doctor. `None` fields are unchanged.
#[derive(Debug, Clone, Default)]
pub struct DoctorPatch {
    pub full_name: Option<String>,
    pub specialty: Option<String>,
    pub image_url: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub experience_years: Option<Option<i32>>,
    pub department_id: Option<i32>,
    pub is_available: Option<bool>,
}
