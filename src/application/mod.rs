//! Application services.

pub mod services;
