//! Document store abstraction.
//!
//! Documents are JSON objects addressed by a collection path such as
//! `users/{uid}/cart` plus a document id. Every operation touches a single
//! document; there are no multi-document transactions.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

pub const REVIEWS: &str = "reviews";
pub const MESSAGES: &str = "messages";

pub fn cart_path(user_id: &str) -> String {
    format!("users/{user_id}/cart")
}

pub fn favorites_path(user_id: &str) -> String {
    format!("users/{user_id}/favorites")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    #[error("invalid key {0:?}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("orm error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    pub fn decode<T: DeserializeOwned>(self) -> StoreResult<T> {
        Ok(serde_json::from_value(self.data)?)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// Create or overwrite the document.
    async fn set(&self, collection: &str, id: &str, data: Value) -> StoreResult<()>;

    /// Insert under a freshly generated id and return it.
    async fn add(&self, collection: &str, data: Value) -> StoreResult<String>;

    /// Merge the top-level fields of `patch` into an existing document.
    /// Fails with `NotFound` when the document does not exist.
    async fn update(&self, collection: &str, id: &str, patch: Value) -> StoreResult<()>;

    /// Deleting a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Documents whose top-level fields equal every `(field, value)` pair.
    async fn query(&self, collection: &str, filters: &[(&str, Value)])
    -> StoreResult<Vec<Document>>;
}

pub async fn get_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
) -> StoreResult<Option<T>> {
    match store.get(collection, id).await? {
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
        None => Ok(None),
    }
}

pub async fn set_as<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
    value: &T,
) -> StoreResult<()> {
    store.set(collection, id, serde_json::to_value(value)?).await
}

pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub(crate) fn merge_fields(target: &mut Value, patch: Value) {
    match (target.as_object_mut(), patch) {
        (Some(fields), Value::Object(changes)) => {
            for (key, value) in changes {
                fields.insert(key, value);
            }
        }
        (_, patch) => *target = patch,
    }
}

pub(crate) fn matches_filters(data: &Value, filters: &[(&str, Value)]) -> bool {
    filters
        .iter()
        .all(|(field, expected)| data.get(*field) == Some(expected))
}
