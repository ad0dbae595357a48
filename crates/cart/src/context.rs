//! Process-wide cart context.
//!
//! The preferred way to reach the cart is dependency injection: construct a
//! [`CartStore`] at startup and pass it by reference. Applications that want
//! one shared instance reachable from anywhere install it here once, at
//! startup; reaching for the cart before that is a programming error and
//! fails loudly instead of answering with a phantom empty cart.

use std::sync::OnceLock;

use thiserror::Error;

use crate::store::CartStore;

static CONTEXT: OnceLock<CartStore> = OnceLock::new();

/// Misuse of the process-wide cart context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// [`current`] was called before [`install`].
    #[error("cart context accessed before install; construct the store at startup")]
    NotInstalled,
    /// [`install`] was called a second time.
    #[error("cart context already installed")]
    AlreadyInstalled,
}

/// Install the process-wide cart store. Call once at startup.
///
/// # Errors
///
/// Returns [`ContextError::AlreadyInstalled`] if a store was installed
/// before; the new store is dropped.
pub fn install(store: CartStore) -> Result<(), ContextError> {
    CONTEXT
        .set(store)
        .map_err(|_| ContextError::AlreadyInstalled)
}

/// The installed process-wide cart store.
///
/// # Errors
///
/// Returns [`ContextError::NotInstalled`] when no store has been installed.
/// Callers are expected to treat this as fatal: it means initialization
/// never ran, not that the cart is empty.
pub fn current() -> Result<&'static CartStore, ContextError> {
    CONTEXT.get().ok_or(ContextError::NotInstalled)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::storage::MemoryStorage;

    use super::*;

    // One test drives the whole lifecycle: the context is a process-global,
    // so separate tests would race on installation order.
    #[tokio::test]
    async fn test_context_lifecycle() {
        assert!(matches!(current(), Err(ContextError::NotInstalled)));

        let store = CartStore::new(Arc::new(MemoryStorage::new()), "gomarket:items");
        install(store).unwrap();

        let installed = current().unwrap();
        assert!(installed.products().await.is_empty());

        let duplicate = CartStore::new(Arc::new(MemoryStorage::new()), "gomarket:items");
        assert!(matches!(
            install(duplicate),
            Err(ContextError::AlreadyInstalled)
        ));
    }
}
