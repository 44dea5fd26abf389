pub mod auth;
pub mod cors;
pub mod rate_limit;
pub mod tracing;
