//! DTOs for blood bank endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{BloodBank, BloodBankPatch, NewBloodBank};

/// Request body for `POST /api/v1/blood-banks`.
///
/// Inventory counts default to zero.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBloodBankRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub phone: String,

    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_o_positive: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_o_negative: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_a_positive: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_a_negative: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_b_positive: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_b_negative: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_ab_positive: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub blood_group_ab_negative: i32,

    #[serde(default)]
    pub available_24_7: bool,
}

impl CreateBloodBankRequest {
    pub fn into_new(self) -> NewBloodBank {
        NewBloodBank {
            name: self.name,
            description: self.description,
            phone: self.phone,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            blood_group_o_positive: self.blood_group_o_positive,
            blood_group_o_negative: self.blood_group_o_negative,
            blood_group_a_positive: self.blood_group_a_positive,
            blood_group_a_negative: self.blood_group_a_negative,
            blood_group_b_positive: self.blood_group_b_positive,
            blood_group_b_negative: self.blood_group_b_negative,
            blood_group_ab_positive: self.blood_group_ab_positive,
            blood_group_ab_negative: self.blood_group_ab_negative,
            available_24_7: self.available_24_7,
        }
    }
}

/// Request body for `PATCH /api/v1/blood-banks/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBloodBankRequest {
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

    #[validate(range(min = 0))]
    pub blood_group_o_positive: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_o_negative: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_a_positive: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_a_negative: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_b_positive: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_b_negative: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_ab_positive: Option<i32>,
    #[validate(range(min = 0))]
    pub blood_group_ab_negative: Option<i32>,

    pub available_24_7: Option<bool>,

    pub is_active: Option<bool>,
}

impl UpdateBloodBankRequest {
    pub fn into_patch(self) -> BloodBankPatch {
        BloodBankPatch {
            name: self.name,
            description: self.description,
            phone: self.phone,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            blood_group_o_positive: self.blood_group_o_positive,
            blood_group_o_negative: self.blood_group_o_negative,
            blood_group_a_positive: self.blood_group_a_positive,
            blood_group_a_negative: self.blood_group_a_negative,
            blood_group_b_positive: self.blood_group_b_positive,
            blood_group_b_negative: self.blood_group_b_negative,
            blood_group_ab_positive: self.blood_group_ab_positive,
            blood_group_ab_negative: self.blood_group_ab_negative,
            available_24_7: self.available_24_7,
            is_active: self.is_active,
        }
    }
}

/// Query parameters for `GET /api/v1/blood-banks`.
///
/// When `blood_group` is present the list is restricted to active banks
/// holding at least one unit of that group. Unknown group keys are not an
/// error; they yield an empty page.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BloodBankListParams {
    #[serde(flatten)]
    pub page: PageParams,

    pub blood_group: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active_only: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub available_24_7: Option<bool>,
}

/// A blood bank as returned by the API.
#[derive(Debug, Serialize)]
pub struct BloodBankItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub phone: String,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub blood_group_o_positive: i32,
    pub blood_group_o_negative: i32,
    pub blood_group_a_positive: i32,
    pub blood_group_a_negative: i32,
    pub blood_group_b_positive: i32,
    pub blood_group_b_negative: i32,
    pub blood_group_ab_positive: i32,
    pub blood_group_ab_negative: i32,
    pub available_24_7: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BloodBank> for BloodBankItem {
    fn from(b: BloodBank) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            phone: b.phone,
            location: b.location,
            latitude: b.latitude,
            longitude: b.longitude,
            blood_group_o_positive: b.blood_group_o_positive,
            blood_group_o_negative: b.blood_group_o_negative,
            blood_group_a_positive: b.blood_group_a_positive,
            blood_group_a_negative: b.blood_group_a_negative,
            blood_group_b_positive: b.blood_group_b_positive,
            blood_group_b_negative: b.blood_group_b_negative,
            blood_group_ab_positive: b.blood_group_ab_positive,
            blood_group_ab_negative: b.blood_group_ab_negative,
            available_24_7: b.available_24_7,
            is_active: b.is_active,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/blood-banks`.
#[derive(Debug, Serialize)]
pub struct BloodBankListResponse {
    pub items: Vec<BloodBankItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
