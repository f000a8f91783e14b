//! # Cart Store
//!
//! Process-wide owner of the cart.
//!
//! ## Thread Safety
//! The cart sits behind one `Mutex`. A dispatch takes the lock, applies the
//! transition and notifies every observer before releasing it, so two
//! concurrent dispatches can never interleave their read-modify-persist.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Dispatch                                        │
//! │                                                                         │
//! │  caller ──► dispatch(action) ──► lock ──► CartState::apply(action)      │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                   observers.cart_changed(..)            │
//! │                                   (CartPersister writes the snapshot)   │
//! │                                              │                          │
//! │  caller ◄──────── snapshot ◄──── unlock ◄────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Observers run after every dispatch, including dispatches that turned out
//! to be no-ops (decrement at quantity 1, unknown id).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopfront_core::{CartAction, CartState, Product, ProductId};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::storage::KeyValueStore;

// =============================================================================
// Observers
// =============================================================================

/// Notified after every cart dispatch, while the cart lock is still held.
pub trait CartObserver: Send + Sync {
    fn cart_changed(&self, action: &CartAction, cart: &CartState);
}

/// Writes the full cart snapshot to local storage after every dispatch.
pub struct CartPersister {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartPersister {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        CartPersister {
            storage,
            key: key.into(),
        }
    }

    /// Reads the stored cart.
    ///
    /// ## Fallbacks
    /// - Nothing stored: empty cart
    /// - Storage read fails: warning, empty cart
    /// - Stored JSON is malformed: warning, empty cart
    pub fn hydrate(&self) -> CartState {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored cart, starting empty");
                return CartState::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored cart, starting empty");
                return CartState::new();
            }
        };

        match serde_json::from_str::<CartState>(&raw) {
            Ok(cart) => {
                info!(
                    key = %self.key,
                    lines = cart.items().len(),
                    total = %cart.total(),
                    "Hydrated cart"
                );
                cart
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored cart is malformed, starting empty");
                CartState::new()
            }
        }
    }

    /// Serializes `cart` and writes it under the configured key.
    pub fn persist(&self, cart: &CartState) -> StoreResult<()> {
        let json = serde_json::to_string(cart)?;
        self.storage.set(&self.key, &json)
    }
}

impl CartObserver for CartPersister {
    fn cart_changed(&self, action: &CartAction, cart: &CartState) {
        if let Err(e) = self.persist(cart) {
            warn!(
                key = %self.key,
                action = action.name(),
                error = %e,
                "Failed to persist cart"
            );
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Lockable cart plus its observers.
pub struct CartStore {
    cart: Mutex<CartState>,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl CartStore {
    /// Creates an empty, unobserved cart.
    pub fn new() -> Self {
        Self::with_state(CartState::new())
    }

    pub fn with_state(state: CartState) -> Self {
        CartStore {
            cart: Mutex::new(state),
            observers: Vec::new(),
        }
    }

    /// Hydrates from `storage` and persists every later dispatch back to it.
    pub fn persistent(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let persister = CartPersister::new(storage, key);
        let state = persister.hydrate();
        Self::with_state(state).with_observer(Arc::new(persister))
    }

    /// Registers an observer.
    pub fn with_observer(mut self, observer: Arc<dyn CartObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `action`, notifies observers and returns the resulting cart.
    pub fn dispatch(&self, action: CartAction) -> CartState {
        let mut cart = self.lock();
        let changed = cart.apply(&action);
        debug!(
            action = action.name(),
            product_id = ?action.product_id(),
            changed,
            total = %cart.total(),
            "Cart dispatch"
        );
        for observer in &self.observers {
            observer.cart_changed(&action, &cart);
        }
        cart.clone()
    }

    pub fn add_item(&self, product: &Product) -> CartState {
        self.dispatch(CartAction::AddItem(product.clone()))
    }

    pub fn remove_item(&self, id: &ProductId) -> CartState {
        self.dispatch(CartAction::RemoveItem(id.clone()))
    }

    pub fn increment_quantity(&self, id: &ProductId) -> CartState {
        self.dispatch(CartAction::IncrementQuantity(id.clone()))
    }

    pub fn decrement_quantity(&self, id: &ProductId) -> CartState {
        self.dispatch(CartAction::DecrementQuantity(id.clone()))
    }

    pub fn clear_cart(&self) -> CartState {
        self.dispatch(CartAction::Clear)
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> CartState {
        self.lock().clone()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
