use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
        favorites::{FavoriteList, FavoriteRequest, FavoriteStatus},
        games::{PricedGame, PricedGameDetails, PricedGameList},
        messages::ContactRequest,
        reviews::{AverageRating, ReviewList, SubmitReviewRequest, UpdateReviewRequest, VoteResult},
    },
    models::{
        CartItem, ContactMessage, FavoriteEntry, Game, GameDetails, GameStore, NamedRef,
        PlatformEntry, PriceQuote, Review, Taxonomy, VoteState,
    },
    response::{ApiResponse, Meta},
    routes::{cart, favorites, games, health, messages, params, reviews},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        games::list_games,
        games::get_game,
        games::game_screenshots,
        games::game_stores,
        games::game_rating,
        games::game_reviews,
        games::list_genres,
        games::list_platforms,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::checkout,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::toggle_favorite,
        favorites::favorite_status,
        favorites::remove_favorite,
        reviews::submit_review,
        reviews::my_reviews,
        reviews::get_review,
        reviews::update_review,
        reviews::delete_review,
        reviews::like_review,
        reviews::dislike_review,
        messages::send_message
    ),
    components(
        schemas(
            NamedRef,
            PlatformEntry,
            Game,
            GameDetails,
            GameStore,
            Taxonomy,
            PriceQuote,
            PricedGame,
            PricedGameList,
            PricedGameDetails,
            CartItem,
            CartSummary,
            AddToCartRequest,
            UpdateQuantityRequest,
            FavoriteEntry,
            FavoriteList,
            FavoriteRequest,
            FavoriteStatus,
            Review,
            ReviewList,
            VoteState,
            VoteResult,
            AverageRating,
            SubmitReviewRequest,
            UpdateReviewRequest,
            ContactMessage,
            ContactRequest,
            params::Pagination,
            params::GameQuery,
            params::PageSlot,
            Meta,
            ApiResponse<CartSummary>,
            ApiResponse<PricedGameList>,
            ApiResponse<ReviewList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Games", description = "Catalog browsing with storefront prices"),
        (name = "Cart", description = "Cart for signed-in users or anonymous sessions"),
        (name = "Favorites", description = "Favorite games of the signed-in user"),
        (name = "Reviews", description = "Reviews, ratings and votes"),
        (name = "Messages", description = "Contact form"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
