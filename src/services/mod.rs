pub mod cart_service;
pub mod catalog_service;
pub mod favorite_service;
pub mod message_service;
pub mod review_service;
