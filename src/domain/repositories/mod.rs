//! Repository traits with hand-written contracts.
//!
//! The hospital resources go through the generic
//! [`crate::domain::repository::ResourceRepository`] contract; only API
//! token storage keeps a dedicated trait because its operations do not fit
//! the CRUD shape.

pub mod token_repository;

pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use token_repository::MockTokenRepository;
