use chrono::Utc;

use crate::{
    dto::messages::ContactRequest,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::ContactMessage,
    response::{ApiResponse, Meta},
    store::{DocumentStore, MESSAGES, StoreError},
};

fn validate(payload: &ContactRequest) -> AppResult<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("a valid email is required".into()));
    }
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("message is required".into()));
    }
    Ok(())
}

pub async fn submit_message(
    store: &dyn DocumentStore,
    user: Option<&AuthUser>,
    payload: ContactRequest,
) -> AppResult<ApiResponse<ContactMessage>> {
    validate(&payload)?;

    let mut message = ContactMessage {
        id: String::new(),
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        subject: payload.subject.trim().to_string(),
        message: payload.message,
        user_id: user.map(|u| u.user_id.clone()),
        created_at: Utc::now(),
    };
    let data = serde_json::to_value(&message).map_err(StoreError::from)?;
    message.id = store.add(MESSAGES, data).await?;

    tracing::info!(message_id = %message.id, "contact message received");
    Ok(ApiResponse::success(
        "Message sent",
        message,
        Some(Meta::empty()),
    ))
}
