//! Generic PostgreSQL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;
use std::sync::Arc;

use super::resource::{NamedResource, PgResource};
use crate::domain::repository::{
    DeletePolicy, FilterSet, FilterValue, Page, PageWindow, ResourceRepository,
};
use crate::error::AppError;

/// PostgreSQL implementation of the generic resource repository.
///
/// One instance per resource type; construction is cheap (pool handle plus
/// a marker), so handlers build them on demand from [`crate::state::AppState`].
pub struct PgRepository<M: PgResource> {
    pool: Arc<PgPool>,
    _resource: PhantomData<fn() -> M>,
}

impl<M: PgResource> PgRepository<M> {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    /// Rejects filter keys that are not in the resource's allow-list.
    fn check_filters(filters: &FilterSet) -> Result<(), AppError> {
        for (field, _) in filters.iter() {
            if !M::FILTER_COLUMNS.contains(&field) {
                return Err(AppError::invalid_filter(
                    format!("Unknown filter field '{field}'"),
                    json!({ "field": field, "allowed": M::FILTER_COLUMNS }),
                ));
            }
        }
        Ok(())
    }

    /// Appends `AND column = $n` for each filter. Callers must have run
    /// `check_filters` first: field names are pushed as raw SQL.
    fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filters: &FilterSet) {
        for (field, value) in filters.iter() {
            query.push(" AND ").push(field).push(" = ");
            match value {
                FilterValue::Bool(v) => query.push_bind(*v),
                FilterValue::Int(v) => query.push_bind(*v),
                FilterValue::Text(v) => query.push_bind(v.clone()),
                FilterValue::Date(v) => query.push_bind(*v),
            };
        }
    }
}

#[async_trait]
impl<M: PgResource> ResourceRepository for PgRepository<M> {
    type Entity = M;
    type New = M::New;
    type Patch = M::Patch;

    async fn list(&self, window: PageWindow, filters: &FilterSet) -> Result<Page<M>, AppError> {
        Self::check_filters(filters)?;

        let mut query = QueryBuilder::new("SELECT * FROM ");
        query.push(M::TABLE).push(" WHERE TRUE");
        Self::push_filters(&mut query, filters);
        query.push(" ORDER BY id");
        query.push(" LIMIT ").push_bind(window.limit());
        query.push(" OFFSET ").push_bind(window.skip());

        let items = query
            .build_query_as::<M>()
            .fetch_all(self.pool.as_ref())
            .await?;

        // Total matching count, independent of the page window.
        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM ");
        count.push(M::TABLE).push(" WHERE TRUE");
        Self::push_filters(&mut count, filters);

        let total: i64 = count
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Page { items, total })
    }

    async fn get(&self, id: i32) -> Result<Option<M>, AppError> {
        let mut query = QueryBuilder::new("SELECT * FROM ");
        query.push(M::TABLE).push(" WHERE id = ").push_bind(id);

        Ok(query
            .build_query_as::<M>()
            .fetch_optional(self.pool.as_ref())
            .await?)
    }

    async fn create(&self, input: M::New) -> Result<M, AppError> {
        let mut query = QueryBuilder::new("INSERT INTO ");
        query.push(M::TABLE).push(" ");
        M::push_insert(&mut query, &input);
        query.push(" RETURNING *");

        Ok(query
            .build_query_as::<M>()
            .fetch_one(self.pool.as_ref())
            .await?)
    }

    async fn update(&self, id: i32, patch: M::Patch) -> Result<M, AppError> {
        let mut query = QueryBuilder::new("UPDATE ");
        query.push(M::TABLE).push(" SET ");
        {
            let mut assignments = query.separated(", ");
            M::push_update(&mut assignments, &patch);
            // Unconditional, also keeps the SET clause non-empty.
            assignments.push("updated_at = NOW()");
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" RETURNING *");

        query
            .build_query_as::<M>()
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| {
                AppError::not_found("Record not found", json!({ "id": id, "resource": M::TABLE }))
            })
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let affected = match M::DELETE {
            DeletePolicy::Hard => {
                let mut query = QueryBuilder::new("DELETE FROM ");
                query.push(M::TABLE).push(" WHERE id = ").push_bind(id);

                query.build().execute(self.pool.as_ref()).await?
            }
            DeletePolicy::Deactivate { flag } => {
                let mut query = QueryBuilder::new("UPDATE ");
                query
                    .push(M::TABLE)
                    .push(" SET ")
                    .push(flag)
                    .push(" = FALSE, updated_at = NOW() WHERE id = ")
                    .push_bind(id)
                    .push(" AND ")
                    .push(flag)
                    .push(" = TRUE");

                query.build().execute(self.pool.as_ref()).await?
            }
        }
        .rows_affected();

        Ok(affected > 0)
    }
}

impl<M: NamedResource> PgRepository<M> {
    /// Exact lookup by the resource's unique name column.
    ///
    /// Used by handlers to pre-check uniqueness before create/rename; the
    /// database constraint remains the authoritative arbiter under races.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<M>, AppError> {
        let mut query = QueryBuilder::new("SELECT * FROM ");
        query
            .push(M::TABLE)
            .push(" WHERE ")
            .push(M::NAME_COLUMN)
            .push(" = ")
            .push_bind(name.to_string());

        Ok(query
            .build_query_as::<M>()
            .fetch_optional(self.pool.as_ref())
            .await?)
    }
}
