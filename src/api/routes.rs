//! API route configuration.
//!
//! Read endpoints for public-facing content are open; everything that
//! mutates managed content requires Bearer token authentication via
//! [`crate::api::middleware::auth`]. Booking an appointment and submitting
//! a contact message stay public, since both come from the patient-facing
//! site.

use crate::api::handlers::{
    ambulance_service_create_handler, ambulance_service_delete_handler,
    ambulance_service_get_handler, ambulance_service_list_handler,
    ambulance_service_update_handler, appointment_create_handler, appointment_delete_handler,
    appointment_get_handler, appointment_list_handler, appointment_update_handler,
    blood_bank_create_handler, blood_bank_delete_handler, blood_bank_get_handler,
    blood_bank_list_handler, blood_bank_update_handler, contact_message_create_handler,
    contact_message_delete_handler, contact_message_get_handler, contact_message_list_handler,
    contact_message_update_handler, department_create_handler, department_delete_handler,
    department_get_handler, department_list_handler, department_update_handler,
    doctor_create_handler, doctor_delete_handler, doctor_get_handler, doctor_list_handler,
    doctor_update_handler, eye_product_create_handler, eye_product_delete_handler,
    eye_product_get_handler, eye_product_list_handler, eye_product_update_handler,
    service_create_handler, service_delete_handler, service_get_handler, service_list_handler,
    service_update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Routes that require no authentication.
///
/// # Endpoints
///
/// - `GET  /departments`, `GET /departments/{id}` (same for doctors,
///   services, ambulance-services, eye-products, blood-banks)
/// - `POST /appointments`      - book an appointment
/// - `POST /contact-messages`  - submit the contact form
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(department_list_handler))
        .route("/departments/{id}", get(department_get_handler))
        .route("/doctors", get(doctor_list_handler))
        .route("/doctors/{id}", get(doctor_get_handler))
        .route("/services", get(service_list_handler))
        .route("/services/{id}", get(service_get_handler))
        .route("/ambulance-services", get(ambulance_service_list_handler))
        .route(
            "/ambulance-services/{id}",
            get(ambulance_service_get_handler),
        )
        .route("/eye-products", get(eye_product_list_handler))
        .route("/eye-products/{id}", get(eye_product_get_handler))
        .route("/blood-banks", get(blood_bank_list_handler))
        .route("/blood-banks/{id}", get(blood_bank_get_handler))
        .route("/appointments", post(appointment_create_handler))
        .route("/contact-messages", post(contact_message_create_handler))
}

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST/PATCH/DELETE` for all managed content resources
/// - `GET/PATCH/DELETE /appointments*` and `/contact-messages*`
///   (patient data is never exposed without a token)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", post(department_create_handler))
        .route(
            "/departments/{id}",
            patch(department_update_handler).delete(department_delete_handler),
        )
        .route("/doctors", post(doctor_create_handler))
        .route(
            "/doctors/{id}",
            patch(doctor_update_handler).delete(doctor_delete_handler),
        )
        .route("/services", post(service_create_handler))
        .route(
            "/services/{id}",
            patch(service_update_handler).delete(service_delete_handler),
        )
        .route("/ambulance-services", post(ambulance_service_create_handler))
        .route(
            "/ambulance-services/{id}",
            patch(ambulance_service_update_handler).delete(ambulance_service_delete_handler),
        )
        .route("/eye-products", post(eye_product_create_handler))
        .route(
            "/eye-products/{id}",
            patch(eye_product_update_handler).delete(eye_product_delete_handler),
        )
        .route("/blood-banks", post(blood_bank_create_handler))
        .route(
            "/blood-banks/{id}",
            patch(blood_bank_update_handler).delete(blood_bank_delete_handler),
        )
        .route("/appointments", get(appointment_list_handler))
        .route(
            "/appointments/{id}",
            get(appointment_get_handler)
                .patch(appointment_update_handler)
                .delete(appointment_delete_handler),
        )
        .route("/contact-messages", get(contact_message_list_handler))
        .route(
            "/contact-messages/{id}",
            get(contact_message_get_handler)
                .patch(contact_message_update_handler)
                .delete(contact_message_delete_handler),
        )
}
