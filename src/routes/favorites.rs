use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::favorites::{FavoriteList, FavoriteRequest, FavoriteStatus},
    error::AppResult,
    middleware::auth::AuthUser,
    models::FavoriteEntry,
    response::ApiResponse,
    routes::params::Pagination,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/toggle", post(toggle_favorite))
        .route("/{game_id}", get(favorite_status).delete(remove_favorite))
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Favorites, most recently added first", body = ApiResponse<FavoriteList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<FavoriteList>>> {
    Ok(Json(
        favorite_service::list_favorites(state.store.as_ref(), &user, pagination).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<FavoriteEntry>),
        (status = 401, description = "Not signed in")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<FavoriteRequest>,
) -> AppResult<Json<ApiResponse<FavoriteEntry>>> {
    Ok(Json(
        favorite_service::add_favorite(state.store.as_ref(), &user, &payload.game).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/favorites/toggle",
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "New favorite state", body = ApiResponse<FavoriteStatus>),
        (status = 401, description = "Not signed in")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<FavoriteRequest>,
) -> AppResult<Json<ApiResponse<FavoriteStatus>>> {
    Ok(Json(
        favorite_service::toggle_favorite(state.store.as_ref(), &user, &payload.game).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/favorites/{game_id}",
    params(("game_id" = i64, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Whether the game is a favorite", body = ApiResponse<FavoriteStatus>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn favorite_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<i64>,
) -> AppResult<Json<ApiResponse<FavoriteStatus>>> {
    Ok(Json(
        favorite_service::favorite_status(state.store.as_ref(), &user, game_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{game_id}",
    params(("game_id" = i64, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        favorite_service::remove_favorite(state.store.as_ref(), &user, game_id).await?,
    ))
}
