//! Table mapping and inventory queries for blood banks.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{BloodBank, BloodBankPatch, BloodGroup, NewBloodBank};
use crate::domain::repository::{DeletePolicy, Page, PageWindow};
use crate::error::AppError;
use crate::infrastructure::persistence::repository::PgRepository;
use crate::infrastructure::persistence::resource::{NamedResource, PgResource};

impl PgResource for BloodBank {
    type New = NewBloodBank;
    type Patch = BloodBankPatch;

    const TABLE: &'static str = "blood_banks";
    const FILTER_COLUMNS: &'static [&'static str] = &["is_active", "available_24_7"];
    const DELETE: DeletePolicy = DeletePolicy::Deactivate { flag: "is_active" };

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewBloodBank) {
        qb.push(
            "(name, description, phone, location, latitude, longitude, \
             blood_group_o_positive, blood_group_o_negative, \
             blood_group_a_positive, blood_group_a_negative, \
             blood_group_b_positive, blood_group_b_negative, \
             blood_group_ab_positive, blood_group_ab_negative, \
             available_24_7) VALUES (",
        );
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.name.clone());
            values.push_bind(input.description.clone());
            values.push_bind(input.phone.clone());
            values.push_bind(input.location.clone());
            values.push_bind(input.latitude.clone());
            values.push_bind(input.longitude.clone());
            values.push_bind(input.blood_group_o_positive);
            values.push_bind(input.blood_group_o_negative);
            values.push_bind(input.blood_group_a_positive);
            values.push_bind(input.blood_group_a_negative);
            values.push_bind(input.blood_group_b_positive);
            values.push_bind(input.blood_group_b_negative);
            values.push_bind(input.blood_group_ab_positive);
            values.push_bind(input.blood_group_ab_negative);
            values.push_bind(input.available_24_7);
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &BloodBankPatch,
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

        // Inventory columns share a shape; the static mapping keeps each
        // bind typed against its own column.
        let inventory = [
            (BloodGroup::OPositive, patch.blood_group_o_positive),
            (BloodGroup::ONegative, patch.blood_group_o_negative),
            (BloodGroup::APositive, patch.blood_group_a_positive),
            (BloodGroup::ANegative, patch.blood_group_a_negative),
            (BloodGroup::BPositive, patch.blood_group_b_positive),
            (BloodGroup::BNegative, patch.blood_group_b_negative),
            (BloodGroup::AbPositive, patch.blood_group_ab_positive),
            (BloodGroup::AbNegative, patch.blood_group_ab_negative),
        ];
        for (group, units) in inventory {
            if let Some(units) = units {
                assignments.push(group.column());
                assignments.push_unseparated(" = ");
                assignments.push_bind_unseparated(units);
            }
        }

        if let Some(available_24_7) = patch.available_24_7 {
            assignments
                .push("available_24_7 = ")
                .push_bind_unseparated(available_24_7);
        }
        if let Some(is_active) = patch.is_active {
            assignments
                .push("is_active = ")
                .push_bind_unseparated(is_active);
        }
    }
}

impl NamedResource for BloodBank {}

impl PgRepository<BloodBank> {
    /// Lists active banks holding at least one unit of `group`.
    ///
    /// The column is resolved through the [`BloodGroup`] mapping; callers
    /// that fail to parse an external key short-circuit to an empty page
    /// and never reach this query.
    pub async fn list_by_blood_group(
        &self,
        group: BloodGroup,
        window: PageWindow,
    ) -> Result<Page<BloodBank>, AppError> {
        let mut query =
            QueryBuilder::new("SELECT * FROM blood_banks WHERE is_active = TRUE AND ");
        query.push(group.column()).push(" > 0");
        query.push(" ORDER BY id");
        query.push(" LIMIT ").push_bind(window.limit());
        query.push(" OFFSET ").push_bind(window.skip());

        let items = query
            .build_query_as::<BloodBank>()
            .fetch_all(self.pool())
            .await?;

        let mut count =
            QueryBuilder::new("SELECT COUNT(*) FROM blood_banks WHERE is_active = TRUE AND ");
        count.push(group.column()).push(" > 0");

        let total: i64 = count.build_query_scalar().fetch_one(self.pool()).await?;

        Ok(Page { items, total })
    }
}
