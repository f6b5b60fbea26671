use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformEntry {
    pub platform: NamedRef,
}

/// Catalog game as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Game {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genres: Vec<NamedRef>,
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDetails {
    #[serde(flatten)]
    pub game: Game,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub metacritic: Option<i64>,
    #[serde(default)]
    pub developers: Vec<NamedRef>,
    #[serde(default)]
    pub publishers: Vec<NamedRef>,
}

/// Genre or platform taxonomy entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Taxonomy {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub games_count: i64,
    #[serde(default)]
    pub image_background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Screenshot {
    pub id: i64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameStore {
    pub id: i64,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub store_id: Option<i64>,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceQuote {
    pub price: Decimal,
    pub has_discount: bool,
    pub discount_percentage: u32,
    pub original_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub background_image: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteEntry {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub added: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteState {
    None,
    Liked,
    Disliked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub game_id: i64,
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub rating: u8,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub disliked_by: Vec<String>,
}

impl Review {
    pub fn vote_of(&self, user_id: &str) -> VoteState {
        if self.liked_by.iter().any(|id| id == user_id) {
            VoteState::Liked
        } else if self.disliked_by.iter().any(|id| id == user_id) {
            VoteState::Disliked
        } else {
            VoteState::None
        }
    }

    /// Liking again withdraws the like; liking over a dislike replaces it.
    pub fn like(&mut self, user_id: &str) -> VoteState {
        let next = match self.vote_of(user_id) {
            VoteState::Liked => VoteState::None,
            VoteState::None | VoteState::Disliked => VoteState::Liked,
        };
        self.apply_vote(user_id, next);
        next
    }

    pub fn dislike(&mut self, user_id: &str) -> VoteState {
        let next = match self.vote_of(user_id) {
            VoteState::Disliked => VoteState::None,
            VoteState::None | VoteState::Liked => VoteState::Disliked,
        };
        self.apply_vote(user_id, next);
        next
    }

    fn apply_vote(&mut self, user_id: &str, state: VoteState) {
        self.liked_by.retain(|id| id != user_id);
        self.disliked_by.retain(|id| id != user_id);
        match state {
            VoteState::Liked => self.liked_by.push(user_id.to_string()),
            VoteState::Disliked => self.disliked_by.push(user_id.to_string()),
            VoteState::None => {}
        }
        // counters always mirror the voter sets
        self.likes = self.liked_by.len() as i64;
        self.dislikes = self.disliked_by.len() as i64;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
