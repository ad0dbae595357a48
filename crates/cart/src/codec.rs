//! Versioned encoding of the persisted cart snapshot.
//!
//! The cart is written whole on every mutation, wrapped in an explicit
//! envelope so format drift fails a decode instead of silently corrupting
//! state:
//!
//! ```json
//! {"version": 1, "persisted_at": "2026-08-07T12:00:00Z", "items": [...]}
//! ```
//!
//! Carts persisted before the envelope existed were bare item arrays;
//! [`decode`] still accepts those so old devices hydrate unchanged.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::CartItem;

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur when decoding a persisted snapshot.
///
/// The store treats every variant the same way at hydration time: the
/// payload is corrupt and the cart starts empty.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not valid JSON in either the envelope or legacy shape.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The envelope carries a version this build does not understand.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    /// An item was stored with quantity 0, which no operation can produce.
    #[error("item {id} has zero quantity")]
    ZeroQuantity {
        /// Offending item id.
        id: String,
    },
    /// Two items share an id.
    #[error("duplicate item id {id}")]
    DuplicateId {
        /// Offending item id.
        id: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    persisted_at: DateTime<Utc>,
    items: Vec<CartItem>,
}

/// Encode the full item list for persistence.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if serialization fails.
pub fn encode(items: &[CartItem]) -> Result<String, CodecError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        persisted_at: Utc::now(),
        items: items.to_vec(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Decode a persisted payload back into the item list.
///
/// Accepts the current envelope and the legacy bare-array format. The
/// decoded list is checked against the cart invariants; a payload that
/// violates them is rejected as corrupt.
///
/// # Errors
///
/// Returns a [`CodecError`] for malformed JSON, unknown versions, zero
/// quantities, or duplicate ids.
pub fn decode(text: &str) -> Result<Vec<CartItem>, CodecError> {
    let items = match serde_json::from_str::<Snapshot>(text) {
        Ok(snapshot) => {
            if snapshot.version != SNAPSHOT_VERSION {
                return Err(CodecError::UnsupportedVersion(snapshot.version));
            }
            snapshot.items
        }
        // Pre-envelope carts were bare arrays; report the envelope error if
        // the payload is neither.
        Err(envelope_err) => serde_json::from_str::<Vec<CartItem>>(text)
            .map_err(|_| CodecError::Malformed(envelope_err))?,
    };
    validate(&items)?;
    Ok(items)
}

fn validate(items: &[CartItem]) -> Result<(), CodecError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.quantity == 0 {
            return Err(CodecError::ZeroQuantity {
                id: item.id.to_string(),
            });
        }
        if !seen.insert(item.id.clone()) {
            return Err(CodecError::DuplicateId {
                id: item.id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gomarket_core::{Price, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            image_url: format!("https://cdn.example.com/{id}.png"),
            price: Price::new(Decimal::new(999, 2)),
            quantity,
        }
    }

    #[test]
    fn test_roundtrip_preserves_items_and_order() {
        let items = vec![item("b", 2), item("a", 1), item("c", 7)];
        let encoded = encode(&items).unwrap();
        assert_eq!(decode(&encoded).unwrap(), items);
    }

    #[test]
    fn test_roundtrip_empty_cart() {
        let encoded = encode(&[]).unwrap();
        assert_eq!(decode(&encoded).unwrap(), Vec::<CartItem>::new());
    }

    #[test]
    fn test_decode_legacy_bare_array() {
        let legacy = serde_json::to_string(&vec![item("a", 3)]).unwrap();
        assert_eq!(decode(&legacy).unwrap(), vec![item("a", 3)]);
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let payload = format!(
            "{{\"version\":99,\"persisted_at\":\"2026-01-01T00:00:00Z\",\"items\":[{}]}}",
            serde_json::to_string(&item("a", 1)).unwrap()
        );
        assert!(matches!(
            decode(&payload),
            Err(CodecError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_decode_rejects_zero_quantity() {
        let legacy = serde_json::to_string(&vec![item("a", 0)]).unwrap();
        assert!(matches!(
            decode(&legacy),
            Err(CodecError::ZeroQuantity { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let legacy = serde_json::to_string(&vec![item("a", 1), item("a", 2)]).unwrap();
        assert!(matches!(
            decode(&legacy),
            Err(CodecError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not json at all"),
            Err(CodecError::Malformed(_))
        ));
    }
}
