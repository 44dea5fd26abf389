//! Table mapping for departments.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{Department, DepartmentPatch, NewDepartment};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::{NamedResource, PgResource};

impl PgResource for Department {
    type New = NewDepartment;
    type Patch = DepartmentPatch;

    const TABLE: &'static str = "departments";
    const FILTER_COLUMNS: &'static [&'static str] = &["is_active"];
    const DELETE: DeletePolicy = DeletePolicy::Deactivate { flag: "is_active" };

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewDepartment) {
        qb.push("(name, description, image_url) VALUES (");
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.name.clone());
            values.push_bind(input.description.clone());
            values.push_bind(input.image_url.clone());
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &DepartmentPatch,
    ) {
        if let Some(name) = &patch.name {
            assignments.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(description) = &patch.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(image_url) = &patch.image_url {
            assignments
                .push("image_url = ")
                .push_bind_unseparated(image_url.clone());
        }
        if let Some(is_active) = patch.is_active {
            assignments
                .push("is_active = ")
                .push_bind_unseparated(is_active);
        }
    }
}

impl NamedResource for Department {}
