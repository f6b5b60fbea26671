use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::{
        games::{PricedGame, PricedGameDetails, PricedGameList},
        reviews::{AverageRating, ReviewList},
    },
    error::{AppError, AppResult},
    models::{GameStore, Taxonomy},
    pricing::calculate_game_price,
    response::{ApiResponse, Meta},
    routes::params::{GameQuery, Pagination},
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games))
        .route("/{game}", get(get_game))
        .route("/{game}/screenshots", get(game_screenshots))
        .route("/{game}/stores", get(game_stores))
        .route("/{game}/rating", get(game_rating))
        .route("/{game}/reviews", get(game_reviews))
}

pub fn taxonomy_router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/platforms", get(list_platforms))
}

pub fn parse_game_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid game id {raw:?}")))
}

#[utoipa::path(
    get,
    path = "/api/games",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("search" = Option<String>, Query, description = "Search text"),
        ("genre" = Option<i64>, Query, description = "Genre id")
    ),
    responses(
        (status = 200, description = "Games with storefront prices", body = ApiResponse<PricedGameList>)
    ),
    tag = "Games"
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> AppResult<Json<ApiResponse<PricedGameList>>> {
    let (page, per_page, _) = query.pagination().normalize();
    let search = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let result = match (search, query.genre) {
        (Some(text), _) => state.catalog.search_games(text, page, per_page).await,
        (None, Some(genre)) => state.catalog.games_by_genre(genre, page, per_page).await,
        (None, None) => state.catalog.popular_games(page, per_page).await,
    };

    let items = result
        .games
        .into_iter()
        .map(|game| PricedGame {
            pricing: calculate_game_price(&game),
            game,
        })
        .collect();

    let meta = Meta::with_window(page, per_page, result.count);
    Ok(Json(ApiResponse::success(
        "Games",
        PricedGameList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/games/{game}",
    params(("game" = String, Path, description = "Game slug")),
    responses(
        (status = 200, description = "Game details with price", body = ApiResponse<PricedGameDetails>),
        (status = 404, description = "Game not found")
    ),
    tag = "Games"
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<PricedGameDetails>>> {
    let details = state
        .catalog
        .game_details(&slug)
        .await
        .ok_or(AppError::NotFound)?;
    let pricing = calculate_game_price(&details.game);
    Ok(Json(ApiResponse::success(
        "Game",
        PricedGameDetails { details, pricing },
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/games/{game}/screenshots",
    params(("game" = i64, Path, description = "Game id")),
    responses((status = 200, description = "Screenshot URLs", body = ApiResponse<Vec<String>>)),
    tag = "Games"
)]
pub async fn game_screenshots(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let game_id = parse_game_id(&game)?;
    let shots = state.catalog.game_screenshots(game_id).await;
    Ok(Json(ApiResponse::success("OK", shots, Some(Meta::empty()))))
}

#[utoipa::path(
    get,
    path = "/api/games/{game}/stores",
    params(("game" = i64, Path, description = "Game id")),
    responses((status = 200, description = "Store listings", body = ApiResponse<Vec<GameStore>>)),
    tag = "Games"
)]
pub async fn game_stores(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<GameStore>>>> {
    let game_id = parse_game_id(&game)?;
    let stores = state.catalog.game_stores(game_id).await;
    Ok(Json(ApiResponse::success("OK", stores, Some(Meta::empty()))))
}

#[utoipa::path(
    get,
    path = "/api/games/{game}/rating",
    params(("game" = i64, Path, description = "Game id")),
    responses((status = 200, description = "Average review rating", body = ApiResponse<AverageRating>)),
    tag = "Reviews"
)]
pub async fn game_rating(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> AppResult<Json<ApiResponse<AverageRating>>> {
    let game_id = parse_game_id(&game)?;
    Ok(Json(
        review_service::average_rating(state.store.as_ref(), game_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/games/{game}/reviews",
    params(
        ("game" = i64, Path, description = "Game id"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses((status = 200, description = "Reviews, newest first", body = ApiResponse<ReviewList>)),
    tag = "Reviews"
)]
pub async fn game_reviews(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ReviewList>>> {
    let game_id = parse_game_id(&game)?;
    Ok(Json(
        review_service::list_game_reviews(state.store.as_ref(), game_id, pagination).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/genres",
    responses((status = 200, description = "Genre taxonomy", body = ApiResponse<Vec<Taxonomy>>)),
    tag = "Games"
)]
pub async fn list_genres(State(state): State<AppState>) -> Json<ApiResponse<Vec<Taxonomy>>> {
    let genres = state.catalog.genres().await;
    Json(ApiResponse::success("OK", genres, Some(Meta::empty())))
}

#[utoipa::path(
    get,
    path = "/api/platforms",
    responses((status = 200, description = "Platform taxonomy", body = ApiResponse<Vec<Taxonomy>>)),
    tag = "Games"
)]
pub async fn list_platforms(State(state): State<AppState>) -> Json<ApiResponse<Vec<Taxonomy>>> {
    let platforms = state.catalog.platforms().await;
    Json(ApiResponse::success("OK", platforms, Some(Meta::empty())))
}
