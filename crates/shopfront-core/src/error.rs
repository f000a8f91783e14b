//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  └── CoreError        - Parsing of amounts, ids, languages, themes     │
//! │                                                                         │
//! │  shopfront-store errors (separate crate)                               │
//! │  ├── StoreError       - Local storage failures (always swallowed)      │
//! │  └── CatalogError     - Fetch failures (become FetchStatus::Failed)    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal sees                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations on an absent product id are no-ops, not errors, so none
//! of the variants below describe a missing cart line.

use thiserror::Error;

/// Core parsing errors.
///
/// The state transitions themselves are total; these errors only appear at
/// the edges where text from a user, a config file or a JSON payload is turned
/// into a domain value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A monetary amount could not be parsed.
    ///
    /// ## When This Occurs
    /// - Catalog payload carries a price like `"abc"` or `NaN`
    /// - Amount does not fit in `i64` cents
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Product id was empty.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Language code is not one we ship translations for.
    #[error("Unknown language '{0}'. Valid options: en, hi")]
    UnknownLanguage(String),

    /// Theme name is not `light` or `dark`.
    #[error("Unknown theme '{0}'. Valid options: light, dark")]
    UnknownTheme(String),
}

impl CoreError {
    /// Creates an InvalidAmount error.
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid_amount("1.2.3", "not a decimal number");
        assert_eq!(err.to_string(), "Invalid amount '1.2.3': not a decimal number");

        let err = CoreError::UnknownLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Unknown language 'fr'. Valid options: en, hi");
    }
}
