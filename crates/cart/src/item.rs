//! Cart item model.

use serde::{Deserialize, Serialize};

use gomarket_core::{Price, ProductId};

/// Product data as supplied to `add_to_cart`.
///
/// Carries everything a [`CartItem`] needs except the quantity, which the
/// store manages. Field contents are not validated; callers own what they
/// put in here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier, stable across sessions.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display asset reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

/// One distinct product in the cart.
///
/// Stored items always have `quantity >= 1`; the store removes an item
/// rather than letting its quantity reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog-assigned identifier, unique within the cart.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display asset reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Units of this product in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// A product entering the cart starts at quantity 1.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("prod-1"),
            title: "Espresso Maker".to_string(),
            image_url: "https://cdn.example.com/prod-1.png".to_string(),
            price: Price::new(Decimal::new(12990, 2)),
        }
    }

    #[test]
    fn test_new_item_starts_at_quantity_one() {
        let item = CartItem::new(sample_product());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ProductId::new("prod-1"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let item = CartItem::new(sample_product());
        let json = serde_json::to_string(&item).unwrap();
        let parsed: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_serialized_field_names() {
        let item = CartItem::new(sample_product());
        let value: serde_json::Value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();
        for field in ["id", "title", "image_url", "price", "quantity"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object.len(), 5);
    }
}
