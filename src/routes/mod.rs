use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod doc;
pub mod favorites;
pub mod games;
pub mod health;
pub mod messages;
pub mod params;
pub mod reviews;

// State is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .merge(games::taxonomy_router())
        .nest("/cart", cart::router())
        .nest("/favorites", favorites::router())
        .nest("/reviews", reviews::router())
        .nest("/messages", messages::router())
}
