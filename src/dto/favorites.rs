use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FavoriteEntry, Game};

#[derive(Debug, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    pub game: Game,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteStatus {
    pub game_id: i64,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteList {
    #[schema(value_type = Vec<FavoriteEntry>)]
    pub items: Vec<FavoriteEntry>,
}
