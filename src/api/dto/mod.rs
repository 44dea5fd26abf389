//! Request and response DTOs.

pub mod ambulance_service;
pub mod appointment;
pub mod blood_bank;
pub mod contact_message;
pub mod department;
pub mod doctor;
pub mod eye_product;
pub mod health;
pub mod pagination;
pub mod service;
