//! Generic resource repository contract.
//!
//! Every resource in the system (departments, doctors, blood banks, ...)
//! is accessed through the same five operations: paginated list with
//! equality filters, get by id, create, partial update, and delete.
//! This module defines the store-agnostic vocabulary for that contract;
//! the PostgreSQL implementation lives in
//! [`crate::infrastructure::persistence`].

use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

/// Page size applied when a list request does not specify a limit.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound for the `limit` of any list request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated `(skip, limit)` pair bounding a list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    skip: i64,
    limit: i64,
}

impl PageWindow {
    /// Builds a window, enforcing `skip >= 0` and `1 <= limit <= MAX_PAGE_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either bound is out of range.
    pub fn new(skip: i64, limit: i64) -> Result<Self, AppError> {
        if skip < 0 {
            return Err(AppError::bad_request(
                "skip must be non-negative",
                json!({ "skip": skip }),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::bad_request(
                format!("limit must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "limit": limit }),
            ));
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Typed value for an equality filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Int(i32),
    Text(String),
    Date(NaiveDate),
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

/// Conjunction of equality constraints narrowing a list query.
///
/// Field names are checked against the resource's static allow-list by the
/// repository; an unknown field yields [`AppError::InvalidFilter`].
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<(String, FilterValue)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `field = value` constraint. Builder-style.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters.iter().map(|(f, v)| (f.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

/// What `delete` means for a given resource.
///
/// Content resources that public pages reference deactivate instead of
/// losing rows; transactional records delete hard. Every resource declares
/// its policy once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Remove the row.
    Hard,
    /// Flip the named boolean flag to `FALSE` instead of removing the row.
    Deactivate { flag: &'static str },
}

/// One page of a list result, plus the total count of matching rows
/// computed independently of the page window.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Uniform data-access contract reused by every resource type.
///
/// # Failure semantics
///
/// - `get` and `delete` treat absence as data, not as an error
/// - unique violations surface as [`AppError::Conflict`]
/// - unknown filter fields surface as [`AppError::InvalidFilter`]
/// - transient store failures surface as [`AppError::StoreUnavailable`];
///   no retries happen at this layer
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    type Entity: Send;
    type New: Send;
    type Patch: Send;

    /// Lists entities ordered by id, bounded by `window`, with `filters`
    /// applied as a logical AND.
    async fn list(
        &self,
        window: PageWindow,
        filters: &FilterSet,
    ) -> Result<Page<Self::Entity>, AppError>;

    /// Exact lookup by identifier. Absence is `Ok(None)`.
    async fn get(&self, id: i32) -> Result<Option<Self::Entity>, AppError>;

    /// Inserts a new row from a fully-validated input object.
    async fn create(&self, input: Self::New) -> Result<Self::Entity, AppError>;

    /// Applies only the fields present in `patch`; absent fields are left
    /// untouched. Always refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches `id`.
    async fn update(&self, id: i32, patch: Self::Patch) -> Result<Self::Entity, AppError>;

    /// Deletes (or deactivates, per the resource policy) the row.
    /// Returns whether a row matched.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
