pub mod auth;
pub mod cart;
pub mod favorites;
pub mod games;
pub mod messages;
pub mod reviews;
