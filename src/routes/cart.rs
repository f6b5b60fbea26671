use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
    error::AppResult,
    middleware::auth::Identity,
    models::CartItem,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart))
        .route("/checkout", post(checkout))
        .route(
            "/{game_id}",
            put(update_quantity).delete(remove_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart contents with totals", body = ApiResponse<CartSummary>),
        (status = 401, description = "No identity"),
    ),
    params(("x-cart-session" = Option<String>, Header, description = "Anonymous cart session")),
    security((), ("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let cart = state.cart_for(&identity);
    Ok(Json(
        cart_service::list_cart(cart.as_ref(), state.tax_rate).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add one unit, creating the entry if needed", body = ApiResponse<CartItem>),
        (status = 400, description = "Quantity limit reached"),
        (status = 401, description = "No identity"),
        (status = 404, description = "Game not in the catalog"),
    ),
    params(("x-cart-session" = Option<String>, Header, description = "Anonymous cart session")),
    security((), ("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    let cart = state.cart_for(&identity);
    Ok(Json(
        cart_service::add_catalog_game(cart.as_ref(), &state.catalog, &payload.slug).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/cart/{game_id}",
    request_body = UpdateQuantityRequest,
    params(
        ("game_id" = i64, Path, description = "Game ID"),
        ("x-cart-session" = Option<String>, Header, description = "Anonymous cart session")
    ),
    responses(
        (status = 200, description = "Quantity set; zero or less removes the entry", body = ApiResponse<CartItem>),
        (status = 400, description = "Quantity above the limit"),
    ),
    security((), ("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    identity: Identity,
    Path(game_id): Path<i64>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<Option<CartItem>>>> {
    let cart = state.cart_for(&identity);
    Ok(Json(
        cart_service::update_quantity(cart.as_ref(), game_id, payload.quantity).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{game_id}",
    params(
        ("game_id" = i64, Path, description = "Game ID"),
        ("x-cart-session" = Option<String>, Header, description = "Anonymous cart session")
    ),
    responses(
        (status = 200, description = "Removed; unknown ids are ignored", body = ApiResponse<serde_json::Value>),
    ),
    security((), ("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    identity: Identity,
    Path(game_id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let cart = state.cart_for(&identity);
    Ok(Json(
        cart_service::remove_from_cart(cart.as_ref(), game_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/cart/checkout",
    params(("x-cart-session" = Option<String>, Header, description = "Anonymous cart session")),
    responses(
        (status = 200, description = "Final summary; the cart is emptied", body = ApiResponse<CartSummary>),
        (status = 400, description = "Cart is empty"),
    ),
    security((), ("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let cart = state.cart_for(&identity);
    Ok(Json(
        cart_service::checkout(cart.as_ref(), state.tax_rate).await?,
    ))
}
