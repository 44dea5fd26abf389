//! DTOs for department endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{Department, DepartmentPatch, NewDepartment};

/// Request body for `POST /api/v1/departments`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,
}

impl CreateDepartmentRequest {
    pub fn into_new(self) -> NewDepartment {
        NewDepartment {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// Request body for `PATCH /api/v1/departments/{id}`.
///
/// All fields are optional. For nullable columns, absent means "no change"
/// and an explicit `null` clears the value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,

    pub is_active: Option<bool>,
}

impl UpdateDepartmentRequest {
    pub fn into_patch(self) -> DepartmentPatch {
        DepartmentPatch {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            is_active: self.is_active,
        }
    }
}

/// Query parameters for `GET /api/v1/departments`.
///
/// Inactive departments are excluded unless `active_only=false`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentListParams {
    #[serde(flatten)]
    pub page: PageParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active_only: Option<bool>,
}

/// A department as returned by the API.
#[derive(Debug, Serialize)]
pub struct DepartmentItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Department> for DepartmentItem {
    fn from(d: Department) -> Self {
        Self {
            id: d.id,
            name: d.name,
            description: d.description,
            image_url: d.image_url,
            is_active: d.is_active,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/departments`.
#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub items: Vec<DepartmentItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_description_means_no_change() {
        let req: UpdateDepartmentRequest = serde_json::from_str(r#"{"name": "ENT"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("ENT"));
        assert_eq!(req.description, None);
    }

    #[test]
    fn test_null_description_clears() {
        let req: UpdateDepartmentRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(req.description, Some(None));
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req: CreateDepartmentRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
