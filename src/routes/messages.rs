use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::messages::ContactRequest,
    error::AppResult,
    middleware::auth::AuthUser,
    models::ContactMessage,
    response::ApiResponse,
    services::message_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(send_message))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ApiResponse<ContactMessage>),
        (status = 400, description = "Missing name, email or message")
    ),
    security((), ("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn send_message(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ApiResponse<ContactMessage>>> {
    Ok(Json(
        message_service::submit_message(state.store.as_ref(), user.as_ref(), payload).await?,
    ))
}
