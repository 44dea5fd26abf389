//! Table mapping for appointments.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{Appointment, AppointmentPatch, NewAppointment};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::PgResource;

impl PgResource for Appointment {
    type New = NewAppointment;
    type Patch = AppointmentPatch;

    const TABLE: &'static str = "appointments";
    const FILTER_COLUMNS: &'static [&'static str] =
        &["status", "doctor_id", "department_id", "appointment_date"];
    const DELETE: DeletePolicy = DeletePolicy::Hard;

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewAppointment) {
        // Status is left to its column default ('confirmed').
        qb.push(
            "(patient_name, patient_phone, doctor_id, department_id, \
             appointment_date, appointment_time, notes) VALUES (",
        );
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.patient_name.clone());
            values.push_bind(input.patient_phone.clone());
            values.push_bind(input.doctor_id);
            values.push_bind(input.department_id);
            values.push_bind(input.appointment_date);
            values.push_bind(input.appointment_time);
            values.push_bind(input.notes.clone());
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &AppointmentPatch,
    ) {
        if let Some(doctor_id) = patch.doctor_id {
            assignments
                .push("doctor_id = ")
                .push_bind_unseparated(doctor_id);
        }
        if let Some(appointment_date) = patch.appointment_date {
            assignments
                .push("appointment_date = ")
                .push_bind_unseparated(appointment_date);
        }
        if let Some(appointment_time) = patch.appointment_time {
            assignments
                .push("appointment_time = ")
                .push_bind_unseparated(appointment_time);
        }
        if let Some(notes) = &patch.notes {
            assignments
                .push("notes = ")
                .push_bind_unseparated(notes.clone());
        }
        if let Some(status) = patch.status {
            assignments
                .push("status = ")
                .push_bind_unseparated(status.as_str());
        }
    }
}
