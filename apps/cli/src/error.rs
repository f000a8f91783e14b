//! # CLI Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the shopfront binary                   │
//! │                                                                         │
//! │  ConfigError ───────────┐                                               │
//! │  StoreError (setup) ────┤                                               │
//! │  CatalogError (setup) ──┼──► CliError ──► one-shot: error! + exit 1     │
//! │  failed catalog load ───┤              └► shell: printed, loop goes on  │
//! │  unknown product id ────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures after startup never reach this type: the stores log and
//! swallow them.

use std::path::PathBuf;

use shopfront_core::ProductId;
use shopfront_store::{CatalogError, StoreError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// No data directory configured and the platform has none.
    #[error("No data directory available. Set storage.data_dir or SHOPFRONT_DATA_DIR")]
    NoDataDir,
}

/// Top-level error of the `shopfront` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Opening the data directory failed.
    #[error("Storage setup failed: {0}")]
    Storage(#[from] StoreError),

    /// Building the HTTP client failed.
    #[error("Catalog setup failed: {0}")]
    CatalogSetup(#[from] CatalogError),

    /// The command needs the catalog and the fetch failed.
    #[error("Could not load products: {0}")]
    CatalogUnavailable(String),

    /// The catalog has no product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::ProductNotFound(ProductId::Numeric(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CliError::CatalogUnavailable("Failed to fetch products (HTTP 503)".to_string());
        assert_eq!(
            err.to_string(),
            "Could not load products: Failed to fetch products (HTTP 503)"
        );

        let err: CliError = ConfigError::Invalid("cart key is empty".to_string()).into();
        assert_eq!(err.to_string(), "Invalid configuration: cart key is empty");
    }
}
