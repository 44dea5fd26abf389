//! Table mapping for contact messages.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{ContactMessage, ContactMessagePatch, NewContactMessage};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::PgResource;

impl PgResource for ContactMessage {
    type New = NewContactMessage;
    type Patch = ContactMessagePatch;

    const TABLE: &'static str = "contact_messages";
    const FILTER_COLUMNS: &'static [&'static str] = &["status", "email"];
    const DELETE: DeletePolicy = DeletePolicy::Hard;

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewContactMessage) {
        // Status is left to its column default ('new').
        qb.push("(name, email, phone, subject, message) VALUES (");
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.name.clone());
            values.push_bind(input.email.clone());
            values.push_bind(input.phone.clone());
            values.push_bind(input.subject.clone());
            values.push_bind(input.message.clone());
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &ContactMessagePatch,
    ) {
        if let Some(status) = patch.status {
            assignments
                .push("status = ")
                .push_bind_unseparated(status.as_str());
        }
    }
}
