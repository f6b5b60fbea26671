use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    dto::cart::CartSummary,
    error::{AppError, AppResult},
    local_storage::LocalStorage,
    models::{CartItem, Game},
    pricing::calculate_game_price,
    response::{ApiResponse, Meta},
    services::catalog_service::CatalogClient,
    store::{self, DocumentStore, StoreResult, cart_path},
};

/// Fixed local-storage key holding the anonymous cart.
pub const CART_KEY: &str = "cart";

/// Upper bound for the quantity of a single cart entry.
pub const MAX_QUANTITY: i32 = 99;

/// One cart. Both backends keep at most one entry per game id and drop an
/// entry once its quantity reaches zero.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Adds one unit, up to [`MAX_QUANTITY`]. An existing entry keeps its
    /// original price snapshot.
    async fn add(&self, game: &Game, price: Decimal) -> StoreResult<CartItem>;
    async fn remove(&self, game_id: i64) -> StoreResult<()>;
    /// `quantity <= 0` removes the entry; unknown ids are ignored. Larger
    /// values are capped at [`MAX_QUANTITY`].
    async fn set_quantity(&self, game_id: i64, quantity: i32) -> StoreResult<Option<CartItem>>;
    async fn list(&self) -> StoreResult<Vec<CartItem>>;
    async fn clear(&self) -> StoreResult<()>;
}

fn new_item(game: &Game, price: Decimal) -> CartItem {
    CartItem {
        id: game.id,
        name: game.name.clone(),
        slug: game.slug.clone(),
        background_image: game.background_image.clone(),
        price,
        quantity: 1,
    }
}

fn next_quantity(current: i32) -> i32 {
    current.saturating_add(1).clamp(1, MAX_QUANTITY)
}

/// Signed-in cart: one document per game under `users/{uid}/cart`.
pub struct DocumentCartStore {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl DocumentCartStore {
    pub fn new(store: Arc<dyn DocumentStore>, user_id: &str) -> Self {
        Self {
            store,
            collection: cart_path(user_id),
        }
    }
}

#[async_trait]
impl CartStore for DocumentCartStore {
    async fn add(&self, game: &Game, price: Decimal) -> StoreResult<CartItem> {
        let id = game.id.to_string();
        let existing: Option<CartItem> =
            store::get_as(self.store.as_ref(), &self.collection, &id).await?;

        let item = match existing {
            Some(mut item) => {
                item.quantity = next_quantity(item.quantity);
                item
            }
            None => new_item(game, price),
        };
        store::set_as(self.store.as_ref(), &self.collection, &id, &item).await?;
        Ok(item)
    }

    async fn remove(&self, game_id: i64) -> StoreResult<()> {
        self.store
            .delete(&self.collection, &game_id.to_string())
            .await
    }

    async fn set_quantity(&self, game_id: i64, quantity: i32) -> StoreResult<Option<CartItem>> {
        if quantity <= 0 {
            self.remove(game_id).await?;
            return Ok(None);
        }

        let id = game_id.to_string();
        let existing: Option<CartItem> =
            store::get_as(self.store.as_ref(), &self.collection, &id).await?;
        let Some(mut item) = existing else {
            return Ok(None);
        };
        item.quantity = quantity.min(MAX_QUANTITY);
        store::set_as(self.store.as_ref(), &self.collection, &id, &item).await?;
        Ok(Some(item))
    }

    async fn list(&self) -> StoreResult<Vec<CartItem>> {
        self.store
            .list(&self.collection)
            .await?
            .into_iter()
            .map(|doc| doc.decode())
            .collect()
    }

    async fn clear(&self) -> StoreResult<()> {
        for doc in self.store.list(&self.collection).await? {
            self.store.delete(&self.collection, &doc.id).await?;
        }
        Ok(())
    }
}

/// Anonymous cart: the whole list serialized under [`CART_KEY`], rewritten on
/// every change.
pub struct LocalCartStore {
    storage: Arc<dyn LocalStorage>,
    session: String,
}

impl LocalCartStore {
    pub fn new(storage: Arc<dyn LocalStorage>, session: impl Into<String>) -> Self {
        Self {
            storage,
            session: session.into(),
        }
    }

    async fn read(&self) -> StoreResult<Vec<CartItem>> {
        match self.storage.get_item(&self.session, CART_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, items: &[CartItem]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage.set_item(&self.session, CART_KEY, raw).await
    }
}

#[async_trait]
impl CartStore for LocalCartStore {
    async fn add(&self, game: &Game, price: Decimal) -> StoreResult<CartItem> {
        let mut items = self.read().await?;
        let item = match items.iter_mut().find(|item| item.id == game.id) {
            Some(item) => {
                item.quantity = next_quantity(item.quantity);
                item.clone()
            }
            None => {
                let item = new_item(game, price);
                items.push(item.clone());
                item
            }
        };
        self.write(&items).await?;
        Ok(item)
    }

    async fn remove(&self, game_id: i64) -> StoreResult<()> {
        let items = self.read().await?;
        if items.is_empty() {
            return Ok(());
        }
        let remaining: Vec<CartItem> = items.into_iter().filter(|item| item.id != game_id).collect();
        self.write(&remaining).await
    }

    async fn set_quantity(&self, game_id: i64, quantity: i32) -> StoreResult<Option<CartItem>> {
        if quantity <= 0 {
            self.remove(game_id).await?;
            return Ok(None);
        }

        let mut items = self.read().await?;
        let Some(item) = items.iter_mut().find(|item| item.id == game_id) else {
            return Ok(None);
        };
        item.quantity = quantity.min(MAX_QUANTITY);
        let updated = item.clone();
        self.write(&items).await?;
        Ok(Some(updated))
    }

    async fn list(&self) -> StoreResult<Vec<CartItem>> {
        self.read().await
    }

    async fn clear(&self) -> StoreResult<()> {
        self.storage.remove_item(&self.session, CART_KEY).await
    }
}

pub fn summarize(items: Vec<CartItem>, tax_rate: Decimal) -> CartSummary {
    let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
    let item_count = items.iter().map(|item| i64::from(item.quantity)).sum();
    let tax = (subtotal * tax_rate).round_dp(2);
    CartSummary {
        items,
        item_count,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

pub async fn list_cart(
    cart: &dyn CartStore,
    tax_rate: Decimal,
) -> AppResult<ApiResponse<CartSummary>> {
    let items = match cart.list().await {
        Ok(items) => items,
        Err(err) => {
            tracing::error!(error = %err, "failed to read cart");
            Vec::new()
        }
    };
    let total = items.len() as i64;
    let summary = summarize(items, tax_rate);
    Ok(ApiResponse::success(
        "OK",
        summary,
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn add_to_cart(
    cart: &dyn CartStore,
    game: &Game,
    price: Decimal,
) -> AppResult<ApiResponse<CartItem>> {
    if price < Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    let existing = cart.list().await?;
    if existing
        .iter()
        .any(|item| item.id == game.id && item.quantity >= MAX_QUANTITY)
    {
        return Err(AppError::BadRequest(format!(
            "at most {MAX_QUANTITY} copies per game"
        )));
    }
    let item = cart.add(game, price).await?;
    tracing::debug!(game_id = item.id, quantity = item.quantity, "cart item added");
    Ok(ApiResponse::success("Added to cart", item, None))
}

/// Resolves the game in the catalog and adds it at the catalog-derived price.
pub async fn add_catalog_game(
    cart: &dyn CartStore,
    catalog: &CatalogClient,
    slug: &str,
) -> AppResult<ApiResponse<CartItem>> {
    let details = catalog.game_details(slug).await.ok_or(AppError::NotFound)?;
    let price = calculate_game_price(&details.game).price;
    add_to_cart(cart, &details.game, price).await
}

pub async fn update_quantity(
    cart: &dyn CartStore,
    game_id: i64,
    quantity: i32,
) -> AppResult<ApiResponse<Option<CartItem>>> {
    if quantity > MAX_QUANTITY {
        return Err(AppError::BadRequest(format!(
            "quantity must be at most {MAX_QUANTITY}"
        )));
    }
    let item = cart.set_quantity(game_id, quantity).await?;
    let message = if item.is_some() {
        "Quantity updated"
    } else {
        "Removed from cart"
    };
    tracing::debug!(game_id, quantity, "cart quantity set");
    Ok(ApiResponse::success(message, item, Some(Meta::empty())))
}

pub async fn remove_from_cart(
    cart: &dyn CartStore,
    game_id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    cart.remove(game_id).await?;
    tracing::debug!(game_id, "cart item removed");
    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Purchases the cart: returns the final summary and empties the cart.
pub async fn checkout(
    cart: &dyn CartStore,
    tax_rate: Decimal,
) -> AppResult<ApiResponse<CartSummary>> {
    let items = cart.list().await?;
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }
    let summary = summarize(items, tax_rate);
    cart.clear().await?;
    tracing::info!(
        items = summary.item_count,
        total = %summary.total,
        "checkout completed"
    );
    Ok(ApiResponse::success(
        "Checkout success",
        summary,
        Some(Meta::empty()),
    ))
}
