//! Core business entities and data-access contracts.

pub mod entities;
pub mod repositories;
pub mod repository;
