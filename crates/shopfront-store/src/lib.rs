//! # shopfront-store: Stores and Local Persistence for Shopfront
//!
//! Wraps the pure state from `shopfront-core` in process-wide stores and owns
//! every read and write of durable local state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Data Flow                              │
//! │                                                                         │
//! │  CLI command (cart add 3)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopfront-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐     │   │
//! │  │   │  CartStore    │   │ ProductStore  │   │  UserStore    │     │   │
//! │  │   │  + observers  │   │ + CatalogSrc  │   │  (memory)     │     │   │
//! │  │   └───────┬───────┘   └───────────────┘   └───────────────┘     │   │
//! │  │           │ CartPersister                                       │   │
//! │  │   ┌───────▼───────────────────────────────────────────────┐     │   │
//! │  │   │  KeyValueStore: FileStore | MemoryStore               │     │   │
//! │  │   │  keys: cart, theme, language                          │     │   │
//! │  │   └───────────────────────────────────────────────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Key-value persistence adapter and its backends
//! - [`cart_store`] - Cart store, observers, snapshot persistence
//! - [`product_store`] - Catalog fetch driver and the `CatalogSource` trait
//! - [`user_store`] - Identity and preferences
//! - [`settings`] - Persisted theme and language
//! - [`error`] - Storage and catalog error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shopfront_store::{CartStore, KeyValueStore, MemoryStore};
//!
//! let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! let cart = CartStore::persistent(storage.clone(), "cart");
//! cart.clear_cart();
//!
//! assert_eq!(
//!     storage.get("cart").unwrap().as_deref(),
//!     Some(r#"{"items":[],"total":0}"#)
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod product_store;
pub mod settings;
pub mod storage;
pub mod user_store;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_store::{CartObserver, CartPersister, CartStore};
pub use error::{CatalogError, StoreError, StoreResult};
pub use product_store::{CatalogSource, FetchOutcome, ProductStore};
pub use settings::{LocaleSettings, ThemeSettings};
pub use storage::{validate_key, FileStore, KeyValueStore, MemoryStore};
pub use user_store::UserStore;
