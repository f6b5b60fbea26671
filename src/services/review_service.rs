use chrono::Utc;
use serde_json::json;

use crate::{
    dto::reviews::{AverageRating, ReviewList, SubmitReviewRequest, UpdateReviewRequest, VoteResult},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Review, VoteState},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    store::{self, Document, DocumentStore, REVIEWS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Like,
    Dislike,
}

pub fn validate_review(rating: u8, content: &str) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("review content is required".to_string()));
    }
    Ok(())
}

fn review_from_doc(doc: Document) -> Option<Review> {
    let id = doc.id.clone();
    match doc.decode::<Review>() {
        Ok(mut review) => {
            review.id = id;
            Some(review)
        }
        Err(err) => {
            tracing::warn!(error = %err, review_id = %id, "skipping malformed review");
            None
        }
    }
}

fn newest_first(docs: Vec<Document>) -> Vec<Review> {
    let mut reviews: Vec<Review> = docs.into_iter().filter_map(review_from_doc).collect();
    reviews.sort_by(|a, b| b.date.cmp(&a.date));
    reviews
}

/// Stores a new review and returns its generated id.
pub async fn add_review(store: &dyn DocumentStore, review: &Review) -> AppResult<String> {
    let mut data = serde_json::to_value(review).map_err(store::StoreError::from)?;
    if let Some(fields) = data.as_object_mut() {
        fields.remove("id");
    }
    let id = store.add(REVIEWS, data).await?;
    tracing::debug!(review_id = %id, game_id = review.game_id, "review added");
    Ok(id)
}

pub async fn get_review(store: &dyn DocumentStore, review_id: &str) -> Option<Review> {
    match store.get(REVIEWS, review_id).await {
        Ok(Some(data)) => review_from_doc(Document {
            id: review_id.to_string(),
            data,
        }),
        Ok(None) => None,
        Err(err) => {
            tracing::error!(error = %err, review_id, "failed to read review");
            None
        }
    }
}

pub async fn get_game_reviews(store: &dyn DocumentStore, game_id: i64) -> Vec<Review> {
    match store.query(REVIEWS, &[("gameId", json!(game_id))]).await {
        Ok(docs) => newest_first(docs),
        Err(err) => {
            tracing::error!(error = %err, game_id, "failed to read game reviews");
            Vec::new()
        }
    }
}

pub async fn get_user_reviews(store: &dyn DocumentStore, user_id: &str) -> Vec<Review> {
    match store.query(REVIEWS, &[("userId", json!(user_id))]).await {
        Ok(docs) => newest_first(docs),
        Err(err) => {
            tracing::error!(error = %err, user_id, "failed to read user reviews");
            Vec::new()
        }
    }
}

async fn find_user_review(
    store: &dyn DocumentStore,
    user_id: &str,
    game_id: i64,
) -> Option<Review> {
    let filters = [("userId", json!(user_id)), ("gameId", json!(game_id))];
    match store.query(REVIEWS, &filters).await {
        Ok(docs) => newest_first(docs).into_iter().next(),
        Err(err) => {
            tracing::error!(error = %err, user_id, game_id, "failed to look up review");
            None
        }
    }
}

pub async fn has_user_reviewed(store: &dyn DocumentStore, user_id: &str, game_id: i64) -> bool {
    find_user_review(store, user_id, game_id).await.is_some()
}

/// Overwrites rating and content; the review date moves to now.
pub async fn update_review(
    store: &dyn DocumentStore,
    review_id: &str,
    rating: u8,
    content: &str,
) -> AppResult<()> {
    validate_review(rating, content)?;
    store
        .update(
            REVIEWS,
            review_id,
            json!({
                "rating": rating,
                "content": content,
                "date": Utc::now(),
            }),
        )
        .await?;
    tracing::debug!(review_id, "review updated");
    Ok(())
}

pub async fn delete_review(store: &dyn DocumentStore, review_id: &str) -> AppResult<()> {
    store.delete(REVIEWS, review_id).await?;
    tracing::debug!(review_id, "review deleted");
    Ok(())
}

/// Applies a like or dislike toggle. Returns `None` when the review does not
/// exist. Counters and voter sets are written back in one update.
pub async fn cast_vote(
    store: &dyn DocumentStore,
    review_id: &str,
    user_id: &str,
    vote: Vote,
) -> AppResult<Option<(Review, VoteState)>> {
    let Some(data) = store.get(REVIEWS, review_id).await? else {
        return Ok(None);
    };
    let mut review: Review = serde_json::from_value(data).map_err(store::StoreError::from)?;
    review.id = review_id.to_string();

    let state = match vote {
        Vote::Like => review.like(user_id),
        Vote::Dislike => review.dislike(user_id),
    };

    store
        .update(
            REVIEWS,
            review_id,
            json!({
                "likes": review.likes,
                "dislikes": review.dislikes,
                "likedBy": review.liked_by,
                "dislikedBy": review.disliked_by,
            }),
        )
        .await?;
    tracing::debug!(review_id, user_id, state = ?state, "review vote applied");
    Ok(Some((review, state)))
}

pub async fn like_review(
    store: &dyn DocumentStore,
    review_id: &str,
    user_id: &str,
) -> AppResult<Option<(Review, VoteState)>> {
    cast_vote(store, review_id, user_id, Vote::Like).await
}

pub async fn dislike_review(
    store: &dyn DocumentStore,
    review_id: &str,
    user_id: &str,
) -> AppResult<Option<(Review, VoteState)>> {
    cast_vote(store, review_id, user_id, Vote::Dislike).await
}

/// Mean rating and review count; `{0, 0}` for a game without reviews.
pub async fn get_average_rating(store: &dyn DocumentStore, game_id: i64) -> AverageRating {
    let reviews = get_game_reviews(store, game_id).await;
    if reviews.is_empty() {
        return AverageRating {
            average: 0.0,
            count: 0,
        };
    }
    let total: f64 = reviews.iter().map(|review| f64::from(review.rating)).sum();
    let count = reviews.len() as i64;
    AverageRating {
        average: total / count as f64,
        count,
    }
}

/// Creates the user's review of a game, or edits it if one already exists.
///
/// Uniqueness per (user, game) is checked here rather than by the store, so
/// two submissions racing each other can still both create a review.
pub async fn submit_review(
    store: &dyn DocumentStore,
    user: &AuthUser,
    payload: SubmitReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    validate_review(payload.rating, &payload.content)?;

    if let Some(existing) = find_user_review(store, &user.user_id, payload.game_id).await {
        update_review(store, &existing.id, payload.rating, &payload.content).await?;
        let review = get_review(store, &existing.id).await.ok_or(AppError::NotFound)?;
        return Ok(ApiResponse::success(
            "Review updated",
            review,
            Some(Meta::empty()),
        ));
    }

    let mut review = Review {
        id: String::new(),
        game_id: payload.game_id,
        user_id: user.user_id.clone(),
        user_name: user.display_name(),
        user_email: user.email.clone(),
        rating: payload.rating,
        content: payload.content,
        date: Utc::now(),
        likes: 0,
        dislikes: 0,
        liked_by: Vec::new(),
        disliked_by: Vec::new(),
    };
    review.id = add_review(store, &review).await?;

    Ok(ApiResponse::success(
        "Review created",
        review,
        Some(Meta::empty()),
    ))
}

async fn owned_review(
    store: &dyn DocumentStore,
    user: &AuthUser,
    review_id: &str,
) -> AppResult<Review> {
    let review = get_review(store, review_id).await.ok_or(AppError::NotFound)?;
    if review.user_id != user.user_id {
        return Err(AppError::Forbidden);
    }
    Ok(review)
}

pub async fn edit_review(
    store: &dyn DocumentStore,
    user: &AuthUser,
    review_id: &str,
    payload: UpdateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    owned_review(store, user, review_id).await?;
    update_review(store, review_id, payload.rating, &payload.content).await?;
    let review = get_review(store, review_id).await.ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(
        "Review updated",
        review,
        Some(Meta::empty()),
    ))
}

pub async fn remove_review(
    store: &dyn DocumentStore,
    user: &AuthUser,
    review_id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    owned_review(store, user, review_id).await?;
    delete_review(store, review_id).await?;
    Ok(ApiResponse::success(
        "Review deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn vote_review(
    store: &dyn DocumentStore,
    user: &AuthUser,
    review_id: &str,
    vote: Vote,
) -> AppResult<ApiResponse<VoteResult>> {
    let (review, vote) = cast_vote(store, review_id, &user.user_id, vote)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(
        "OK",
        VoteResult { review, vote },
        Some(Meta::empty()),
    ))
}

pub async fn list_game_reviews(
    store: &dyn DocumentStore,
    game_id: i64,
    pagination: Pagination,
) -> AppResult<ApiResponse<ReviewList>> {
    let reviews = get_game_reviews(store, game_id).await;
    let (items, page, per_page, total) = pagination.apply(reviews);
    Ok(ApiResponse::success(
        "OK",
        ReviewList { items },
        Some(Meta::with_window(page, per_page, total)),
    ))
}

pub async fn list_user_reviews(
    store: &dyn DocumentStore,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<ReviewList>> {
    let reviews = get_user_reviews(store, &user.user_id).await;
    let (items, page, per_page, total) = pagination.apply(reviews);
    Ok(ApiResponse::success(
        "OK",
        ReviewList { items },
        Some(Meta::with_window(page, per_page, total)),
    ))
}

pub async fn average_rating(
    store: &dyn DocumentStore,
    game_id: i64,
) -> AppResult<ApiResponse<AverageRating>> {
    let rating = get_average_rating(store, game_id).await;
    Ok(ApiResponse::success("OK", rating, Some(Meta::empty())))
}
