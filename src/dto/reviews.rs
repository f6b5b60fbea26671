use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Review, VoteState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReviewRequest {
    pub game_id: i64,
    pub rating: u8,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub rating: u8,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct AverageRating {
    pub average: f64,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ReviewList {
    #[schema(value_type = Vec<Review>)]
    pub items: Vec<Review>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteResult {
    pub review: Review,
    pub vote: VoteState,
}
