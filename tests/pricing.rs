use game_storefront_api::{
    models::Game,
    pricing::{
        FALLBACK_PRICE, PRICE_FLOOR, base_price, calculate_game_price, discount_percentage,
        has_discount, quote,
    },
};
use rust_decimal::Decimal;

fn game(id: i64, rating: Option<f64>) -> Game {
    Game {
        id,
        slug: format!("game-{id}"),
        name: format!("Game {id}"),
        released: None,
        background_image: None,
        rating,
        genres: Vec::new(),
        platforms: Vec::new(),
    }
}

#[test]
fn rated_game_without_discount() {
    let quote = calculate_game_price(&game(101, Some(8.0)));
    assert_eq!(quote.price, Decimal::from(79));
    assert!(!quote.has_discount);
    assert_eq!(quote.discount_percentage, 0);
    assert_eq!(quote.original_price, quote.price);
}

#[test]
fn discounted_game_reports_pre_discount_price() {
    // round(45) - (107 mod 5) = 43, 30% off
    let quote = calculate_game_price(&game(107, Some(4.5)));
    assert_eq!(quote.price, Decimal::from(43));
    assert!(quote.has_discount);
    assert_eq!(quote.discount_percentage, 30);
    assert_eq!(quote.original_price, Decimal::new(559, 1));

    let quote = calculate_game_price(&game(9, Some(4.0)));
    assert_eq!(quote.price, Decimal::from(36));
    assert_eq!(quote.discount_percentage, 50);
    assert_eq!(quote.original_price, Decimal::from(54));
}

#[test]
fn missing_or_zero_rating_uses_fallback() {
    assert_eq!(base_price(3, None), FALLBACK_PRICE);
    assert_eq!(base_price(3, Some(0.0)), FALLBACK_PRICE);
    assert_eq!(FALLBACK_PRICE, Decimal::new(2999, 2));
}

#[test]
fn rating_rounds_half_up() {
    assert_eq!(base_price(10, Some(4.25)), Decimal::from(43));
    assert_eq!(base_price(10, Some(4.24)), Decimal::from(42));
}

#[test]
fn low_rating_is_clamped_to_floor() {
    // round(2) - 4 would be -2
    assert_eq!(base_price(4, Some(0.2)), PRICE_FLOOR);
    assert!(quote(4, Some(0.2)).price > Decimal::ZERO);
}

#[test]
fn id_zero_is_valid() {
    let quote = quote(0, Some(3.0));
    assert_eq!(quote.price, Decimal::from(30));
    assert!(!quote.has_discount);
}

#[test]
fn discount_classes_follow_last_digit() {
    for id in 0..200 {
        let expected = matches!(id % 10, 7..=9);
        assert_eq!(has_discount(id), expected, "id {id}");

        let pct = discount_percentage(id);
        if expected {
            assert!([10, 20, 30, 40, 50].contains(&pct), "id {id} got {pct}");
        } else {
            assert_eq!(pct, 0, "id {id}");
        }
    }
}

#[test]
fn quotes_are_deterministic() {
    for id in [0, 1, 17, 101, 3498, 58175] {
        for rating in [None, Some(1.2), Some(3.75), Some(4.9)] {
            assert_eq!(quote(id, rating), quote(id, rating));
            assert_eq!(calculate_game_price(&game(id, rating)), quote(id, rating));
        }
    }
}

#[test]
fn extreme_ratings_are_clamped() {
    assert_eq!(quote(4, Some(-1e300)).price, PRICE_FLOOR);
    assert_eq!(quote(4, Some(-0.5)).price, PRICE_FLOOR);
    assert_eq!(quote(4, Some(1e300)).price, Decimal::from(96));
    assert_eq!(quote(4, Some(f64::MAX)).price, Decimal::from(96));
    assert_eq!(base_price(i64::MIN, Some(1e300)), Decimal::from(98));
}
