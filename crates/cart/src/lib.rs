//! GoMarket Cart - client-side cart state container.
//!
//! Holds an insertion-ordered list of products with quantities, persists the
//! full encoded list to a single key-value slot after every mutation, and
//! exposes add/increment/decrement operations plus a read snapshot to the
//! rest of the application.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - the state container; all mutations go through it
//! - [`storage`] - async key-value backends (in-memory, file-per-key on disk)
//! - [`codec`] - versioned encoding of the persisted snapshot
//! - [`context`] - optional process-wide instance for apps that want one
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use gomarket_cart::{CartStore, MemoryStorage, Product};
//! use gomarket_core::{Price, ProductId};
//!
//! let store = CartStore::new(Arc::new(MemoryStorage::new()), "gomarket:items");
//! store.hydrate().await;
//!
//! store.add_to_cart(Product {
//!     id: ProductId::new("prod-1"),
//!     title: "Espresso Maker".into(),
//!     image_url: "https://cdn.example.com/prod-1.png".into(),
//!     price: Price::new("129.90".parse()?),
//! })
//! .await;
//!
//! assert_eq!(store.products().await.len(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod codec;
pub mod config;
pub mod context;
pub mod item;
pub mod storage;
pub mod store;

pub use codec::CodecError;
pub use config::{CartConfig, ConfigError};
pub use context::ContextError;
pub use item::{CartItem, Product};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::CartStore;
