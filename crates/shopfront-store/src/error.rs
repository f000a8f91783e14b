//! # Store Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌───────────────────────────────┐  ┌───────────────────────────────┐   │
//! │  │  StoreError (local storage)   │  │  CatalogError (product fetch) │   │
//! │  │                               │  │                               │   │
//! │  │  Io                           │  │  Status { status }            │   │
//! │  │  Serialization                │  │  Transport                    │   │
//! │  │  InvalidKey                   │  │  Decode                       │   │
//! │  │                               │  │                               │   │
//! │  │  Logged and swallowed by the  │  │  Becomes FetchStatus::Failed  │   │
//! │  │  cart and settings stores     │  │  in the product store         │   │
//! │  └───────────────────────────────┘  └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Local storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key contains characters outside `[A-Za-z0-9._-]` or is empty.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Product source failure.
///
/// The `Display` text is what ends up in `FetchStatus::Failed { message }`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-success status.
    #[error("Failed to fetch products (HTTP {status})")]
    Status { status: u16 },

    /// The request never got a response.
    #[error("Failed to fetch products: {0}")]
    Transport(String),

    /// The response body was not a product array.
    #[error("Failed to decode products: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::Status { status: 503 }.to_string(),
            "Failed to fetch products (HTTP 503)"
        );
        assert_eq!(
            CatalogError::Transport("connection refused".to_string()).to_string(),
            "Failed to fetch products: connection refused"
        );
    }

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid storage key: \"../etc\"");
    }
}
