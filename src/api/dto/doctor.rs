//! DTOs for doctor endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{Doctor, DoctorPatch, NewDoctor};

/// Request body for `POST /api/v1/doctors`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDoctorRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Specialty must be 1-255 characters"))]
    pub specialty: String,

    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,

    pub bio: Option<String>,

    #[validate(range(min = 0, max = 80, message = "Experience must be 0-80 years"))]
    pub experience_years: Option<i32>,

    pub department_id: i32,
}

impl CreateDoctorRequest {
    pub fn into_new(self) -> NewDoctor {
        NewDoctor {
            full_name: self.full_name,
            specialty: self.specialty,
            image_url: self.image_url,
            bio: self.bio,
            experience_years: self.experience_years,
            department_id: self.department_id,
        }
    }
}

/// Request body for `PATCH /api/v1/doctors/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDoctorRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Specialty must be 1-255 characters"))]
    pub specialty: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub bio: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub experience_years: Option<Option<i32>>,

    pub department_id: Option<i32>,

    pub is_available: Option<bool>,
}

impl UpdateDoctorRequest {
    pub fn into_patch(self) -> DoctorPatch {
        DoctorPatch {
            full_name: self.full_name,
            specialty: self.specialty,
            image_url: self.image_url,
            bio: self.bio,
            experience_years: self.experience_years,
            department_id: self.department_id,
            is_available: self.is_available,
        }
    }
}

/// Query parameters for `GET /api/v1/doctors`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct DoctorListParams {
    #[serde(flatten)]
    pub page: PageParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub department_id: Option<i32>,

    pub specialty: Option<String>,

    /// Restrict to doctors currently accepting appointments.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub available_only: Option<bool>,
}

/// A doctor as returned by the API.
#[derive(Debug, Serialize)]
pub struct DoctorItem {
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

impl From<Doctor> for DoctorItem {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id,
            full_name: d.full_name,
            specialty: d.specialty,
            image_url: d.image_url,
            bio: d.bio,
            experience_years: d.experience_years,
            department_id: d.department_id,
            is_available: d.is_available,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/doctors`.
#[derive(Debug, Serialize)]
pub struct DoctorListResponse {
    pub items: Vec<DoctorItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
