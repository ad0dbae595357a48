//! Asynchronous key-value storage backends.
//!
//! The cart persists as one opaque string under one fixed key, so the
//! storage contract is deliberately small: read a slot, overwrite a slot.

use async_trait::async_trait;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors returned by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous key-value storage.
///
/// Implementations must treat values as opaque text and keys as stable
/// lookup handles. A key that was never written reads as `None`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any prior content.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
