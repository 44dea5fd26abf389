//! Request handlers, one module per resource.

pub mod ambulance_services;
pub mod appointments;
pub mod blood_banks;
pub mod contact_messages;
pub mod departments;
pub mod doctors;
pub mod eye_products;
pub mod health;
pub mod services;

pub use ambulance_services::*;
pub use appointments::*;
pub use blood_banks::*;
pub use contact_messages::*;
pub use departments::*;
pub use doctors::*;
pub use eye_products::*;
pub use health::*;
pub use services::*;
