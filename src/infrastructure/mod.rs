//! Database integrations.

pub mod persistence;
