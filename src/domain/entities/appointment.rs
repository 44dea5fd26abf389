//! Appointment entity and status values.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Lifecycle states of an appointment.
///
/// Transitions happen only through explicit update calls; nothing moves an
/// appointment between states automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Parses an external status string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

/// A booked appointment.
///
/// The doctor is optional: a patient may book into a department and have a
/// doctor assigned later. Appointments are hard-deleted; cancellation is a
/// status change, not a deletion.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Appointment {
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

/// Input data for booking a new appointment. Status starts as `confirmed`.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor_id: Option<i32>,
    pub department_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub notes: Option<String>,
}

/// Partial update for an existing appointment. `None` fields are unchanged;
/// `doctor_id: Some(None)` unassigns the doctor.
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub doctor_id: Option<Option<i32>>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub notes: Option<Option<String>>,
    pub status: Option<AppointmentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in AppointmentStatus::ALL {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert_eq!(AppointmentStatus::parse("pending"), None);
        assert_eq!(AppointmentStatus::parse("CONFIRMED"), None);
        assert_eq!(AppointmentStatus::parse(""), None);
    }
}
