//! Deterministic storefront prices derived from catalog data.
//!
//! The catalog has no prices, so each game gets one computed from its id and
//! rating. The same `(id, rating)` always yields the same quote.

use rust_decimal::Decimal;

use crate::models::{Game, PriceQuote};

/// Base price for games without a usable rating.
pub const FALLBACK_PRICE: Decimal = Decimal::from_parts(2999, 0, 0, false, 2);

/// No game is sold below this price.
pub const PRICE_FLOOR: Decimal = Decimal::from_parts(99, 0, 0, false, 2);

pub fn calculate_game_price(game: &Game) -> PriceQuote {
    quote(game.id, game.rating)
}

pub fn quote(id: i64, rating: Option<f64>) -> PriceQuote {
    let price = base_price(id, rating);
    let has_discount = has_discount(id);
    let discount_percentage = discount_percentage(id);

    let original_price = if has_discount {
        (price + price * Decimal::from(discount_percentage) / Decimal::ONE_HUNDRED).round_dp(2)
    } else {
        price
    };

    PriceQuote {
        price,
        has_discount,
        discount_percentage,
        original_price,
    }
}

/// Ratings outside this range are clamped before pricing.
pub const MAX_RATING: f64 = 10.0;

/// `round(rating * 10) - (id mod 5)`, clamped to [`PRICE_FLOOR`].
pub fn base_price(id: i64, rating: Option<f64>) -> Decimal {
    let rating = match rating {
        Some(r) if r.is_finite() && r != 0.0 => r.clamp(0.0, MAX_RATING),
        _ => return FALLBACK_PRICE,
    };

    // half-up
    let rounded = (rating * 10.0 + 0.5).floor() as i64;
    let price = Decimal::from(rounded - id.rem_euclid(5));
    price.max(PRICE_FLOOR)
}

/// Three ids in ten are on sale: those ending in 7, 8 or 9.
pub fn has_discount(id: i64) -> bool {
    id.rem_euclid(10) > 6
}

/// One of 10, 20, 30, 40 or 50 for discounted ids, otherwise 0.
pub fn discount_percentage(id: i64) -> u32 {
    if has_discount(id) {
        (id.rem_euclid(5) as u32 + 1) * 10
    } else {
        0
    }
}
