//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GOMARKET_DATA_DIR` - Directory for file-backed storage (default: `./data`)
//! - `GOMARKET_NAMESPACE` - Storage-key namespace (default: `gomarket`;
//!   non-empty, must not contain `:`)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory for file-backed storage.
const DEFAULT_DATA_DIR: &str = "./data";

/// Default storage-key namespace.
const DEFAULT_NAMESPACE: &str = "gomarket";

/// Name of the single slot the serialized cart lives under.
const ITEMS_SLOT: &str = "items";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable carries a value the cart cannot use.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory for file-backed storage.
    pub data_dir: PathBuf,
    /// Namespace prefixed onto storage keys.
    pub namespace: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `GOMARKET_NAMESPACE` is set to an empty
    /// value or contains `:` (which would collide with the key separator).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::build(
            std::env::var("GOMARKET_DATA_DIR").ok(),
            std::env::var("GOMARKET_NAMESPACE").ok(),
        )
    }

    fn build(data_dir: Option<String>, namespace: Option<String>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let namespace = namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        if namespace.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "GOMARKET_NAMESPACE",
                "must not be empty".to_string(),
            ));
        }
        if namespace.contains(':') {
            return Err(ConfigError::InvalidEnvVar(
                "GOMARKET_NAMESPACE",
                "must not contain ':'".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            namespace,
        })
    }

    /// The fixed key the serialized cart is stored under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}:{}", self.namespace, ITEMS_SLOT)
    }
}
