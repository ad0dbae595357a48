//! Integration-test support for GoMarket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gomarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full operation sequences over the in-memory backend
//! - `persistence` - Disk-backed round-trips, legacy payloads, corruption

#![cfg_attr(not(test), forbid(unsafe_code))]

use gomarket_cart::Product;
use gomarket_core::{Price, ProductId};

/// Build a test product with deterministic fields derived from `id`.
#[must_use]
pub fn product(id: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.gomarket.test/{id}.png"),
        price: Price::new(price.parse().expect("valid decimal literal")),
    }
}
