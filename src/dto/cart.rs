use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartItem;

/// The game is looked up in the catalog by slug; name, image and price all
/// come from the catalog record.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub slug: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// At most `MAX_QUANTITY`; zero or less removes the entry.
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub item_count: i64,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}
