//! Handlers for contact message endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::contact_message::{
    ContactMessageItem, ContactMessageListParams, ContactMessageListResponse,
    CreateContactMessageRequest, UpdateContactMessageRequest,
};
use crate::domain::entities::{ContactMessage, ContactMessageStatus};
use crate::domain::repository::{FilterSet, ResourceRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Lists contact messages with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/v1/contact-messages?status=&email=`
pub async fn contact_message_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ContactMessageListParams>,
) -> Result<Json<ContactMessageListResponse>, AppError> {
    let window = params.page.window()?;

    let mut filters = FilterSet::new();
    if let Some(status) = params.status.as_deref() {
        let status = ContactMessageStatus::parse(status).ok_or_else(|| {
            AppError::bad_request(
                "Unknown message status",
                json!({ "status": status, "allowed": ["new", "read", "resolved"] }),
            )
        })?;
        filters = filters.eq("status", status.as_str());
    }
    if let Some(email) = params.email {
        filters = filters.eq("email", email);
    }

    let page = state
        .repo::<ContactMessage>()
        .list(window, &filters)
        .await?;

    Ok(Json(ContactMessageListResponse {
        items: page
            .items
            .into_iter()
            .map(ContactMessageItem::from)
            .collect(),
        total: page.total,
        skip: window.skip(),
        limit: window.limit(),
    }))
}

/// Fetches a single contact message by id.
///
/// # Endpoint
///
/// `GET /api/v1/contact-messages/{id}`
pub async fn contact_message_get_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ContactMessageItem>, AppError> {
    let message = state
        .repo::<ContactMessage>()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Message not found", json!({ "id": id })))?;

    Ok(Json(ContactMessageItem::from(message)))
}

/// Accepts a message from the public contact form.
///
/// # Endpoint
///
/// `POST /api/v1/contact-messages`
pub async fn contact_message_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessageItem>), AppError> {
    payload.validate()?;

    let message = state
        .repo::<ContactMessage>()
        .create(payload.into_new())
        .await?;

    Ok((StatusCode::CREATED, Json(ContactMessageItem::from(message))))
}

/// Moves a message through its workflow (`new` → `read` → `resolved`).
///
/// # Endpoint
///
/// `PATCH /api/v1/contact-messages/{id}`
pub async fn contact_message_update_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateContactMessageRequest>,
) -> Result<Json<ContactMessageItem>, AppError> {
    let patch = payload.into_patch()?;

    let message = state.repo::<ContactMessage>().update(id, patch).await?;

    Ok(Json(ContactMessageItem::from(message)))
}

/// Removes a contact message.
///
/// # Endpoint
///
/// `DELETE /api/v1/contact-messages/{id}`
pub async fn contact_message_delete_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.repo::<ContactMessage>().delete(id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Message not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
