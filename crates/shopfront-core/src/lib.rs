//! # shopfront-core: Pure State Logic for Shopfront
//!
//! This crate holds every state transition of the storefront as plain data
//! plus pure functions. Storage, locking and networking live one layer up in
//! `shopfront-store` and `shopfront-catalog`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shopfront CLI (apps/cli)                     │   │
//! │  │    products ──► product ──► cart add/inc/dec ──► theme / lang   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ AppState (stores built once)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │    shopfront-store                 shopfront-catalog            │   │
//! │  │    CartStore, ProductStore,        HttpCatalog (reqwest)        │   │
//! │  │    UserStore, settings, FileStore                               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │  cart   │ │ catalog │ │  user   │ │  i18n   │  │   │
//! │  │   │  Money  │ │CartState│ │ Product │ │UserState│ │translate│  │   │
//! │  │   │         │ │CartLine │ │  State  │ │  Prefs  │ │Language │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductId, Identity, Theme
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart lines and the five cart transitions
//! - [`catalog`] - Fetch lifecycle and product filter
//! - [`user`] - Identity and preferences
//! - [`selectors`] - Read-only projections for the views
//! - [`i18n`] - English/Hindi labels
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{CartState, Money, Product, ProductId};
//!
//! let product = Product {
//!     id: ProductId::Numeric(1),
//!     title: "Backpack".to_string(),
//!     price: Money::from_cents(1000),
//!     category: "bags".to_string(),
//!     image: String::new(),
//!     description: String::new(),
//!     rating: None,
//! };
//!
//! let mut cart = CartState::new();
//! cart.add_item(&product);
//! cart.add_item(&product);
//! assert_eq!(cart.total(), Money::from_cents(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod money;
pub mod selectors;
pub mod types;
pub mod user;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLine, CartState};
pub use catalog::{FetchStatus, FetchTicket, ProductState};
pub use error::{CoreError, CoreResult};
pub use i18n::{translate, Language};
pub use money::Money;
pub use types::*;
pub use user::{Preferences, PreferencesPatch, UserAction, UserState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart snapshot is written under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Storage key for the persisted theme name.
pub const THEME_KEY: &str = "theme";

/// Storage key for the persisted language code.
pub const LANGUAGE_KEY: &str = "language";
