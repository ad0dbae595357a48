//! Newtype product identifier.
//!
//! Product ids arrive from the catalog as opaque strings and stay stable
//! across sessions, so the wrapper stores them verbatim. No shape is imposed
//! on the contents.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product identifier.
///
/// Wraps the catalog-assigned string id. Two cart entries never share a
/// `ProductId`; the cart store enforces uniqueness on insert.
///
/// ## Examples
///
/// ```
/// use gomarket_core::ProductId;
///
/// let id = ProductId::new("prod-42");
/// assert_eq!(id.as_str(), "prod-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ProductId::new("prod-1");
        assert_eq!(format!("{id}"), "prod-1");
    }

    #[test]
    fn test_equality() {
        assert_eq!(ProductId::new("a"), ProductId::from("a"));
        assert_ne!(ProductId::new("a"), ProductId::new("b"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ProductId::new("prod-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prod-1\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_empty_id_is_representable() {
        // Ids are not validated; an empty id round-trips like any other.
        let id = ProductId::new("");
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
