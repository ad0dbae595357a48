//! The cart state container.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use gomarket_core::ProductId;

use crate::codec;
use crate::item::{CartItem, Product};
use crate::storage::Storage;

/// Client-side cart state container.
///
/// Owns the in-memory item list for the process lifetime, mediates all
/// mutations, and writes the full encoded list to a single storage key after
/// each change. Mutations serialize through an internal lock that is held
/// across the storage write, so operations and their persisted snapshots
/// land in the same order and stale-snapshot lost updates cannot occur.
///
/// A failed write is logged and swallowed: the in-memory update stands, and
/// storage catches up on the next successful write.
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
    storage: Arc<dyn Storage>,
    key: String,
}

impl CartStore {
    /// Create a store over `storage`, persisting under `key`.
    ///
    /// The store starts empty; call [`hydrate`](Self::hydrate) once at
    /// startup to load any previously persisted cart.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            storage,
            key: key.into(),
        }
    }

    /// The storage key this store persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load any previously persisted cart. Call once at startup.
    ///
    /// An absent key, a failed read, or an undecodable payload all leave the
    /// cart empty; none of them is an error to the caller.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn hydrate(&self) {
        let stored = match self.storage.get(&self.key).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "cart read failed, starting empty");
                return;
            }
        };
        let Some(text) = stored else {
            debug!("no persisted cart");
            return;
        };
        match codec::decode(&text) {
            Ok(items) => {
                debug!(count = items.len(), "hydrated cart");
                *self.items.lock().await = items;
            }
            Err(e) => {
                warn!(error = %e, "persisted cart is corrupt, starting empty");
            }
        }
    }

    /// Current snapshot of the cart, in insertion order.
    pub async fn products(&self) -> Vec<CartItem> {
        self.items.lock().await.clone()
    }

    /// Add `product` to the cart and persist.
    ///
    /// A product whose id is already in the cart is incremented instead;
    /// duplicate entries are never created. Afterwards the cart holds
    /// exactly one entry for the id.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) {
        let mut items = self.items.lock().await;
        if let Some(item) = items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
            debug!(quantity = item.quantity, "product already in cart, incremented");
        } else {
            items.push(CartItem::new(product));
            debug!(count = items.len(), "appended new item");
        }
        self.persist(&items).await;
    }

    /// Increase the quantity of the item with `id` by one and persist.
    ///
    /// An id not in the cart is a no-op: no state change, no write.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn increment(&self, id: &ProductId) {
        let mut items = self.items.lock().await;
        let Some(item) = items.iter_mut().find(|item| &item.id == id) else {
            debug!("id not in cart, ignoring");
            return;
        };
        item.quantity += 1;
        debug!(quantity = item.quantity, "incremented");
        self.persist(&items).await;
    }

    /// Decrease the quantity of the item with `id` by one and persist.
    ///
    /// An item at quantity 1 is removed entirely; the order of the remaining
    /// items is preserved. An id not in the cart is a no-op: no state
    /// change, no write.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn decrement(&self, id: &ProductId) {
        let mut items = self.items.lock().await;
        let Some(item) = items.iter_mut().find(|item| &item.id == id) else {
            debug!("id not in cart, ignoring");
            return;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
            debug!(quantity = item.quantity, "decremented");
        } else {
            items.retain(|item| &item.id != id);
            debug!(count = items.len(), "quantity reached zero, removed item");
        }
        self.persist(&items).await;
    }

    /// Write the full current list to the fixed key.
    ///
    /// Failures are logged and swallowed; the in-memory update is not rolled
    /// back.
    async fn persist(&self, items: &[CartItem]) {
        let encoded = match codec::encode(items) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart encode failed, skipping write");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &encoded).await {
            warn!(key = %self.key, error = %e, "cart write failed, in-memory state kept");
        }
    }
}
