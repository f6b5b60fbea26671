use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Game, GameDetails, PriceQuote};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GamePage {
    pub games: Vec<Game>,
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PricedGame {
    #[serde(flatten)]
    pub game: Game,
    pub pricing: PriceQuote,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PricedGameList {
    #[schema(value_type = Vec<PricedGame>)]
    pub items: Vec<PricedGame>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PricedGameDetails {
    #[serde(flatten)]
    pub details: GameDetails,
    pub pricing: PriceQuote,
}
