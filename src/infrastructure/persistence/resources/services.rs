//! Table mapping for hospital services.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{NewService, Service, ServicePatch};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::{NamedResource, PgResource};

impl PgResource for Service {
    type New = NewService;
    type Patch = ServicePatch;

    const TABLE: &'static str = "services";
    const FILTER_COLUMNS: &'static [&'static str] = &["is_active"];
    const DELETE: DeletePolicy = DeletePolicy::Deactivate { flag: "is_active" };

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewService) {
        qb.push("(name, description, icon) VALUES (");
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.name.clone());
            values.push_bind(input.description.clone());
            values.push_bind(input.icon.clone());
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &ServicePatch,
    ) {
        if let Some(name) = &patch.name {
            assignments.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(description) = &patch.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(icon) = &patch.icon {
            assignments
                .push("icon = ")
                .push_bind_unseparated(icon.clone());
        }
        if let Some(is_active) = patch.is_active {
            assignments
                .push("is_active = ")
                .push_bind_unseparated(is_active);
        }
    }
}

impl NamedResource for Service {}
