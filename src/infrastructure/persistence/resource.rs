//! Mapping between entities and their PostgreSQL tables.

use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::domain::repository::DeletePolicy;

/// Describes how one entity type maps onto its table.
///
/// Implementations live in [`super::resources`], one per resource. The
/// constants here are the only source of SQL identifiers used by
/// [`super::PgRepository`]; filter keys from requests are validated against
/// `FILTER_COLUMNS` before ever reaching a query.
pub trait PgResource: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Fully-validated creation input.
    type New: Send + Sync;
    /// Partial update; fields left as `None` are not touched.
    type Patch: Send + Sync;

    /// Table name.
    const TABLE: &'static str;

    /// Columns that list queries may filter on.
    const FILTER_COLUMNS: &'static [&'static str];

    /// What `delete` does for this resource.
    const DELETE: DeletePolicy;

    /// Appends `(columns...) VALUES (binds...)` for an INSERT.
    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &Self::New);

    /// Appends `column = bind` assignments for the fields present in
    /// `patch`. The repository appends the `updated_at` refresh itself, so
    /// an all-`None` patch still produces valid SQL.
    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &Self::Patch,
    );
}

/// Marker for resources with a unique, human-facing name column.
///
/// Enables the `find_by_name` pre-check handlers run before create/rename.
pub trait NamedResource: PgResource {
    const NAME_COLUMN: &'static str = "name";
}
