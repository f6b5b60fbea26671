use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::reviews::{ReviewList, SubmitReviewRequest, UpdateReviewRequest, VoteResult},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Review,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::review_service::{self, Vote},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_review))
        .route("/mine", get(my_reviews))
        .route(
            "/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/{id}/like", post(like_review))
        .route("/{id}/dislike", post(dislike_review))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Review created, or the caller's existing review updated", body = ApiResponse<Review>),
        (status = 400, description = "Invalid rating or empty content"),
        (status = 401, description = "Not signed in")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SubmitReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    Ok(Json(
        review_service::submit_review(state.store.as_ref(), &user, payload).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/reviews/mine",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses((status = 200, description = "Reviews written by the caller", body = ApiResponse<ReviewList>)),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn my_reviews(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ReviewList>>> {
    Ok(Json(
        review_service::list_user_reviews(state.store.as_ref(), &user, pagination).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review", body = ApiResponse<Review>),
        (status = 404, description = "Review not found")
    ),
    tag = "Reviews"
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Review>>> {
    let review = review_service::get_review(state.store.as_ref(), &id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("OK", review, Some(Meta::empty()))))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    request_body = UpdateReviewRequest,
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<Review>),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn update_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    Ok(Json(
        review_service::edit_review(state.store.as_ref(), &user, &id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        review_service::remove_review(state.store.as_ref(), &user, &id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/reviews/{id}/like",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Like toggled", body = ApiResponse<VoteResult>),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn like_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<VoteResult>>> {
    Ok(Json(
        review_service::vote_review(state.store.as_ref(), &user, &id, Vote::Like).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/reviews/{id}/dislike",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Dislike toggled", body = ApiResponse<VoteResult>),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
pub async fn dislike_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<VoteResult>>> {
    Ok(Json(
        review_service::vote_review(state.store.as_ref(), &user, &id, Vote::Dislike).await?,
    ))
}
