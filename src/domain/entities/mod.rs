//! Business entities shared across layers.
//!
//! Each resource module defines three types: the entity itself, a `New*`
//! input for creation, and a `*Patch` for partial updates where `None`
//! fields are left unchanged. Nullable fields that can be cleared use
//! `Option<Option<T>>`: `Some(None)` writes NULL, `None` keeps the value.

pub mod ambulance_service;
pub mod appointment;
pub mod blood_bank;
pub mod contact_message;
pub mod department;
pub mod doctor;
pub mod eye_product;
pub mod service;

pub use ambulance_service::{AmbulanceService, AmbulanceServicePatch, NewAmbulanceService};
pub use appointment::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};
pub use blood_bank::{BloodBank, BloodBankPatch, BloodGroup, NewBloodBank};
pub use contact_message::{ContactMessage, ContactMessagePatch, ContactMessageStatus, NewContactMessage};
pub use department::{Department, DepartmentPatch, NewDepartment};
pub use doctor::{Doctor, DoctorPatch, NewDoctor};
pub use eye_product::{EyeProduct, EyeProductPatch, NewEyeProduct};
pub use service::{NewService, Service, ServicePatch};
