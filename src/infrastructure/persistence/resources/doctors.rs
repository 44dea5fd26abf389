//! Table mapping for doctors.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{Doctor, DoctorPatch, NewDoctor};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::PgResource;

impl PgResource for Doctor {
    type New = NewDoctor;
    type Patch = DoctorPatch;

    const TABLE: &'static str = "doctors";
    const FILTER_COLUMNS: &'static [&'static str] =
        &["department_id", "specialty", "is_available"];
    const DELETE: DeletePolicy = DeletePolicy::Hard;

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewDoctor) {
        qb.push(
            "(full_name, specialty, image_url, bio, experience_years, department_id) VALUES (",
        );
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.full_name.clone());
            values.push_bind(input.specialty.clone());
            values.push_bind(input.image_url.clone());
            values.push_bind(input.bio.clone());
            values.push_bind(input.experience_years);
            values.push_bind(input.department_id);
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &DoctorPatch,
    ) {
        if let Some(full_name) = &patch.full_name {
            assignments
                .push("full_name = ")
                .push_bind_unseparated(full_name.clone());
        }
        if let Some(specialty) = &patch.specialty {
            assignments
                .push("specialty = ")
                .push_bind_unseparated(specialty.clone());
        }
        if let Some(image_url) = &patch.image_url {
            assignments
                .push("image_url = ")
                .push_bind_unseparated(image_url.clone());
        }
        if let Some(bio) = &patch.bio {
            assignments.push("bio = ").push_bind_unseparated(bio.clone());
        }
        if let Some(experience_years) = patch.experience_years {
            assignments
                .push("experience_years = ")
                .push_bind_unseparated(experience_years);
        }
        if let Some(department_id) = patch.department_id {
            assignments
                .push("department_id = ")
                .push_bind_unseparated(department_id);
        }
        if let Some(is_available) = patch.is_available {
            assignments
                .push("is_available = ")
                .push_bind_unseparated(is_available);
        }
    }
}
