//! Table mappings, one module per resource.

pub mod ambulance_services;
pub mod appointments;
pub mod blood_banks;
pub mod contact_messages;
pub mod departments;
pub mod doctors;
pub mod eye_products;
pub mod services;
