//! DTOs for hospital service endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{NewService, Service, ServicePatch};

/// Request body for `POST /api/v1/services`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl CreateServiceRequest {
    pub fn into_new(self) -> NewService {
        NewService {
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

/// Request body for `PATCH /api/v1/services/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub icon: Option<Option<String>>,

    pub is_active: Option<bool>,
}

impl UpdateServiceRequest {
    pub fn into_patch(self) -> ServicePatch {
        ServicePatch {
            name: self.name,
            description: self.description,
            icon: self.icon,
            is_active: self.is_active,
        }
    }
}

/// Query parameters for `GET /api/v1/services`.
///
/// Inactive services are excluded unless `active_only=false`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ServiceListParams {
    #[serde(flatten)]
    pub page: PageParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active_only: Option<bool>,
}

/// A hospital service as returned by the API.
#[derive(Debug, Serialize)]
pub struct ServiceItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceItem {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            icon: s.icon,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/services`.
#[derive(Debug, Serialize)]
pub struct ServiceListResponse {
    pub items: Vec<ServiceItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
