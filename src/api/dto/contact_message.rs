//! DTOs for contact message endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::PageParams;
use crate::domain::entities::{
    ContactMessage, ContactMessagePatch, ContactMessageStatus, NewContactMessage,
};
use crate::error::AppError;

/// Request body for `POST /api/v1/contact-messages` (public contact form).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,
}

impl CreateContactMessageRequest {
    pub fn into_new(self) -> NewContactMessage {
        NewContactMessage {
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
        }
    }
}

/// Request body for `PATCH /api/v1/contact-messages/{id}`.
///
/// Only the workflow status moves: `new`, `read`, or `resolved`.
#[derive(Debug, Deserialize)]
pub struct UpdateContactMessageRequest {
    pub status: Option<String>,
}

impl UpdateContactMessageRequest {
    /// Converts into a patch, validating the status string.
    pub fn into_patch(self) -> Result<ContactMessagePatch, AppError> {
        let status = match self.status.as_deref() {
            Some(s) => Some(ContactMessageStatus::parse(s).ok_or_else(|| {
                AppError::bad_request(
                    "Unknown message status",
                    json!({ "status": s, "allowed": ["new", "read", "resolved"] }),
                )
            })?),
            None => None,
        };

        Ok(ContactMessagePatch { status })
    }
}

/// Query parameters for `GET /api/v1/contact-messages`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactMessageListParams {
    #[serde(flatten)]
    pub page: PageParams,

    pub status: Option<String>,

    pub email: Option<String>,
}

/// A contact message as returned by the API.
#[derive(Debug, Serialize)]
pub struct ContactMessageItem {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageItem {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: m.subject,
            message: m.message,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/contact-messages`.
#[derive(Debug, Serialize)]
pub struct ContactMessageListResponse {
    pub items: Vec<ContactMessageItem>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
