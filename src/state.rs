use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    config::default_tax_rate,
    local_storage::{LocalStorage, MemoryLocalStorage},
    middleware::auth::Identity,
    services::{
        cart_service::{CartStore, DocumentCartStore, LocalCartStore},
        catalog_service::CatalogClient,
    },
    store::{DocumentStore, MemoryDocumentStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub local: Arc<dyn LocalStorage>,
    pub catalog: CatalogClient,
    pub tax_rate: Decimal,
}

impl AppState {
    /// Signed-in users get the server-side cart, anonymous sessions the local
    /// one. The two are never merged.
    pub fn cart_for(&self, identity: &Identity) -> Box<dyn CartStore> {
        match identity {
            Identity::User(user) => {
                Box::new(DocumentCartStore::new(self.store.clone(), &user.user_id))
            }
            Identity::Anonymous { session } => {
                Box::new(LocalCartStore::new(self.local.clone(), session.clone()))
            }
        }
    }

    /// Everything in memory; the catalog points at `catalog_url`.
    pub fn in_memory(catalog_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            store: Arc::new(MemoryDocumentStore::new()),
            local: Arc::new(MemoryLocalStorage::new()),
            catalog: CatalogClient::new(catalog_url, None)?,
            tax_rate: default_tax_rate(),
        })
    }
}
