//! Contact message entity.

use chrono::{DateTime, Utc};

/// Workflow states of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMessageStatus {
    New,
    Read,
    Resolved,
}

impl ContactMessageStatus {
    pub const ALL: [ContactMessageStatus; 3] = [
        ContactMessageStatus::New,
        ContactMessageStatus::Read,
        ContactMessageStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMessageStatus::New => "new",
            ContactMessageStatus::Read => "read",
            ContactMessageStatus::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(ContactMessageStatus::New),
            "read" => Some(ContactMessageStatus::Read),
            "resolved" => Some(ContactMessageStatus::Resolved),
            _ => None,
        }
    }
}

/// A message submitted through the public contact form.
///
/// Hard-deleted; there is no activity flag on this resource.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactMessage {
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

/// Input data for a new contact message. Status starts as `new`.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// Partial update for a contact message; only the workflow status moves.
#[derive(Debug, Clone, Default)]
pub struct ContactMessagePatch {
    pub status: Option<ContactMessageStatus>,
}
