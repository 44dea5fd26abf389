//! DTOs for appointment endpoints.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};
use crate::error::AppError;

/// Request body for `POST /api/v1/appointments`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, max = 255, message = "Patient name must be 1-255 characters"))]
    pub patient_name: String,

    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub patient_phone: String,

    pub doctor_id: Option<i32>,

    pub department_id: i32,

    pub appointment_date: NaiveDate,

    pub appointment_time: NaiveTime,

    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn into_new(self) -> NewAppointment {
        NewAppointment {
            patient_name: self.patient_name,
            patient_phone: self.patient_phone,
            doctor_id: self.doctor_id,
            department_id: self.department_id,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            notes: self.notes,
        }
    }
}

/// Request body for `PATCH /api/v1/appointments/{id}`.
///
/// `doctor_id: null` unassigns the doctor. The status string must be one of
/// `confirmed`, `completed`, `cancelled`.
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub doctor_id: Option<Option<i32>>,

    pub appointment_date: Option<NaiveDate>,

    pub appointment_time: Option<NaiveTime>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notes: Option<Option<String>>,

    pub status: Option<String>,
}

impl UpdateAppointmentRequest {
    /// Converts into a patch, validating the status string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown status value.
    pub fn into_patch(self) -> Result<AppointmentPatch, AppError> {
        let status = match self.status.as_deref() {
            Some(s) => Some(AppointmentStatus::parse(s).ok_or_else(|| {
                AppError::bad_request(
                    "Unknown appointment status",
                    json!({ "status": s, "allowed": ["confirmed", "completed", "cancelled"] }),
                )
            })?),
            None => None,
        };

        Ok(AppointmentPatch {
            doctor_id: self.doctor_id,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            notes: self.notes,
            status,
        })
    }
}

/// Query parameters for `GET /api/v1/appointments`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListParams {
    #[serde(flatten)]
    pub page: PageParams,

    pub status: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub doctor_id: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub department_id: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub appointment_date: Option<NaiveDate>,
}

/// An appointment as returned by the API.
#[derive(Debug, Serialize)]
pub struct AppointmentItem {
    pub id: i32,
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor_id: Option<i32>,
    pub department_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentItem {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            patient_name: a.patient_name,
            patient_phone: a.patient_phone,
            doctor_id: a.doctor_id,
            department_id: a.department_id,
            appointment_date: a.appointment_date,
            appointment_time: a.appointment_time,
            notes: a.notes,
            status: a.status,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/appointments`.
#[derive(Debug, Serialize)]
pub struct AppointmentListResponse {
    pub items: Vec<AppointmentItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_rejected() {
        let req: UpdateAppointmentRequest =
            serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        assert!(req.into_patch().is_err());
    }

    #[test]
    fn test_null_doctor_unassigns() {
        let req: UpdateAppointmentRequest =
            serde_json::from_str(r#"{"doctor_id": null}"#).unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.doctor_id, Some(None));
    }

    #[test]
    fn test_absent_fields_change_nothing() {
        let req: UpdateAppointmentRequest = serde_json::from_str("{}").unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.doctor_id, None);
        assert_eq!(patch.status, None);
    }
}
