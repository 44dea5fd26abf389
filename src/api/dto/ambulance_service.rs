//! DTOs for ambulance service endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{AmbulanceService, AmbulanceServicePatch, NewAmbulanceService};

/// Request body for `POST /api/v1/ambulance-services`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmbulanceServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub phone: String,

    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,

    #[serde(default)]
    pub available_24_7: bool,

    #[validate(range(min = 0, message = "Ambulance count must be non-negative"))]
    #[serde(default)]
    pub ambulance_count: i32,
}

impl CreateAmbulanceServiceRequest {
    pub fn into_new(self) -> NewAmbulanceService {
        NewAmbulanceService {
            name: self.name,
            description: self.description,
            phone: self.phone,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            available_24_7: self.available_24_7,
            ambulance_count: self.ambulance_count,
        }
    }
}

/// Request body for `PATCH /api/v1/ambulance-services/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAmbulanceServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub phone: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub latitude: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub longitude: Option<Option<String>>,

    pub available_24_7: Option<bool>,

    #[validate(range(min = 0, message = "Ambulance count must be non-negative"))]
    pub ambulance_count: Option<i32>,

    pub is_active: Option<bool>,
}

impl UpdateAmbulanceServiceRequest {
    pub fn into_patch(self) -> AmbulanceServicePatch {
        AmbulanceServicePatch {
            name: self.name,
            description: self.description,
            phone: self.phone,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            available_24_7: self.available_24_7,
            ambulance_count: self.ambulance_count,
            is_active: self.is_active,
        }
    }
}

/// Query parameters for `GET /api/v1/ambulance-services`.
///
/// Inactive services are excluded unless `active_only=false`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AmbulanceServiceListParams {
    #[serde(flatten)]
    pub page: PageParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active_only: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub available_24_7: Option<bool>,
}

/// An ambulance service as returned by the API.
#[derive(Debug, Serialize)]
pub struct AmbulanceServiceItem {
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

impl From<AmbulanceService> for AmbulanceServiceItem {
    fn from(a: AmbulanceService) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            phone: a.phone,
            location: a.location,
            latitude: a.latitude,
            longitude: a.longitude,
            available_24_7: a.available_24_7,
            ambulance_count: a.ambulance_count,
            is_active: a.is_active,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/ambulance-services`.
#[derive(Debug, Serialize)]
pub struct AmbulanceServiceListResponse {
    pub items: Vec<AmbulanceServiceItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
