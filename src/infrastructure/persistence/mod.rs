//! PostgreSQL persistence layer.
//!
//! CRUD access goes through one generic repository,
//! [`PgRepository`], parameterized by a [`PgResource`] describing the
//! table, filterable columns, delete policy, and insert/update SQL of each
//! entity. Because table and column names are chosen at runtime, queries
//! are assembled with [`sqlx::QueryBuilder`]; every identifier pushed into
//! SQL comes from a compile-time constant, never from request input.
//!
//! API tokens keep a dedicated repository ([`PgTokenRepository`]) since
//! their operations do not fit the CRUD shape.

pub mod pg_token_repository;
pub mod repository;
pub mod resource;
pub mod resources;

pub use pg_token_repository::PgTokenRepository;
pub use repository::PgRepository;
pub use resource::{NamedResource, PgResource};
