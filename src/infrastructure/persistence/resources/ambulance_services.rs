//! Table mapping for ambulance services.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{AmbulanceService, AmbulanceServicePatch, NewAmbulanceService};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::{NamedResource, PgResource};

impl PgResource for AmbulanceService {
    type New = NewAmbulanceService;
    type Patch = AmbulanceServicePatch;

    const TABLE: &'static str = "ambulance_services";
    const FILTER_COLUMNS: &'static [&'static str] = &["is_active", "available_24_7"];
    const DELETE: DeletePolicy = DeletePolicy::Deactivate { flag: "is_active" };

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewAmbulanceService) {
        qb.push(
            "(name, description, phone, location, latitude, longitude, \
             available_24_7, ambulance_count) VALUES (",
        );
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.name.clone());
            values.push_bind(input.description.clone());
            values.push_bind(input.phone.clone());
            values.push_bind(input.location.clone());
            values.push_bind(input.latitude.clone());
            values.push_bind(input.longitude.clone());
            values.push_bind(input.available_24_7);
            values.push_bind(input.ambulance_count);
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &AmbulanceServicePatch,
    ) {
        if let Some(name) = &patch.name {
            assignments.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(description) = &patch.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(phone) = &patch.phone {
            assignments
                .push("phone = ")
                .push_bind_unseparated(phone.clone());
        }
        if let Some(location) = &patch.location {
            assignments
                .push("location = ")
                .push_bind_unseparated(location.clone());
        }
        if let Some(latitude) = &patch.latitude {
            assignments
                .push("latitude = ")
                .push_bind_unseparated(latitude.clone());
        }
        if let Some(longitude) = &patch.longitude {
            assignments
                .push("longitude = ")
                .push_bind_unseparated(longitude.clone());
        }
        if let Some(available_24_7) = patch.available_24_7 {
            assignments
                .push("available_24_7 = ")
                .push_bind_unseparated(available_24_7);
        }
        if let Some(ambulance_count) = patch.ambulance_count {
            assignments
                .push("ambulance_count = ")
                .push_bind_unseparated(ambulance_count);
        }
        if let Some(is_active) = patch.is_active {
            assignments
                .push("is_active = ")
                .push_bind_unseparated(is_active);
        }
    }
}

impl NamedResource for AmbulanceService {}
