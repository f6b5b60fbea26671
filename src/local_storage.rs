//! Client-durable key/value storage for anonymous sessions.
//!
//! Mirrors browser `localStorage`: string values under string keys, one
//! namespace per anonymous session. Writers replace whole values.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::PathBuf,
};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use crate::store::{StoreError, StoreResult};

#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, session: &str, key: &str) -> StoreResult<Option<String>>;
    async fn set_item(&self, session: &str, key: &str, value: String) -> StoreResult<()>;
    async fn remove_item(&self, session: &str, key: &str) -> StoreResult<()>;
}

/// Session ids and keys end up in file names, so only a conservative
/// character set is accepted.
pub fn validate_key(raw: &str) -> StoreResult<&str> {
    let valid = !raw.is_empty()
        && raw.len() <= 128
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(raw)
    } else {
        Err(StoreError::InvalidKey(raw.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryLocalStorage {
    items: RwLock<HashMap<(String, String), String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryLocalStorage {
    async fn get_item(&self, session: &str, key: &str) -> StoreResult<Option<String>> {
        let items = self.items.read().await;
        Ok(items.get(&(session.to_string(), key.to_string())).cloned())
    }

    async fn set_item(&self, session: &str, key: &str, value: String) -> StoreResult<()> {
        let mut items = self.items.write().await;
        items.insert((session.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn remove_item(&self, session: &str, key: &str) -> StoreResult<()> {
        let mut items = self.items.write().await;
        items.remove(&(session.to_string(), key.to_string()));
        Ok(())
    }
}

/// Stores each value in `<root>/<session>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileLocalStorage {
    root: PathBuf,
}

impl FileLocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn item_path(&self, session: &str, key: &str) -> StoreResult<PathBuf> {
        let session = validate_key(session)?;
        let key = validate_key(key)?;
        Ok(self.root.join(session).join(format!("{key}.json")))
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, session: &str, key: &str) -> StoreResult<Option<String>> {
        let path = self.item_path(session, key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set_item(&self, session: &str, key: &str, value: String) -> StoreResult<()> {
        let path = self.item_path(session, key)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        fs::write(&path, value).await?;
        Ok(())
    }

    async fn remove_item(&self, session: &str, key: &str) -> StoreResult<()> {
        let path = self.item_path(session, key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
