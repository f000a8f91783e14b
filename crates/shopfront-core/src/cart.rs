//! # Cart State
//!
//! Pure cart transitions. No storage, no locking: `shopfront-store` wraps
//! this in a `CartStore` and persists after every dispatch.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  CartAction              Transition                 Derived             │
//! │  ──────────              ──────────                 ───────             │
//! │                                                                         │
//! │  AddItem(product) ─────► qty += 1  or  push(qty 1) ─┐                   │
//! │  RemoveItem(id) ───────► retain(id != ..) ──────────┤                   │
//! │  IncrementQuantity(id) ► qty += 1 (if present) ─────┼──► total = Σ p×q  │
//! │  DecrementQuantity(id) ► qty -= 1 (if qty > 1) ─────┤                   │
//! │  Clear ────────────────► items = [] ────────────────┘                   │
//! │                                                                         │
//! │  Absent ids are no-ops. Quantity never drops below 1 through            │
//! │  DecrementQuantity; RemoveItem is the only way out of the cart.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has quantity ≥ 1
//! - `total()` is exactly Σ price × quantity over `items()`, in integer cents

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart plus its quantity.
///
/// Display fields are copied from the product when it is first added, so the
/// cart renders without the catalog being loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product id (unique within the cart).
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line for `product` with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// The five cart intents.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(Product),
    RemoveItem(ProductId),
    IncrementQuantity(ProductId),
    DecrementQuantity(ProductId),
    Clear,
}

impl CartAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::IncrementQuantity(_) => "increment_quantity",
            CartAction::DecrementQuantity(_) => "decrement_quantity",
            CartAction::Clear => "clear_cart",
        }
    }

    /// The product this action targets, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartAction::AddItem(product) => Some(&product.id),
            CartAction::RemoveItem(id)
            | CartAction::IncrementQuantity(id)
            | CartAction::DecrementQuantity(id) => Some(id),
            CartAction::Clear => None,
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Persisted shape. Only `items` is trusted when reading it back.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLine>,
}

impl From<StoredCart> for CartState {
    fn from(stored: StoredCart) -> Self {
        CartState::from_lines(stored.items)
    }
}

/// The shopping cart.
///
/// Serializes as `{"items": [...], "total": 21.98}`. Deserializing rebuilds
/// the state through [`CartState::from_lines`], so a stored `total` that
/// disagrees with the stored items is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(from = "StoredCart")]
#[ts(export)]
pub struct CartState {
    items: Vec<CartLine>,
    total: Money,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a consistent cart from (possibly hand-edited) stored lines.
    ///
    /// ## Normalisation
    /// - Lines with quantity 0 are dropped
    /// - Repeated ids merge into the first occurrence, quantities summed
    /// - The total is recomputed
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = CartState::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|l| l.id == line.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.items.push(line),
            }
        }
        cart.recompute_total();
        cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up the line for `id`.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.id == id)
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1
    /// - Otherwise: new line with quantity 1 appended at the end
    pub fn add_item(&mut self, product: &Product) -> bool {
        match self.items.iter_mut().find(|l| l.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLine::from_product(product)),
        }
        self.recompute_total();
        true
    }

    /// Removes the line for `id`. Returns false if there was none.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|l| &l.id != id);
        self.recompute_total();
        self.items.len() != before
    }

    /// Adds one to the quantity of `id`. Returns false if absent.
    pub fn increment_quantity(&mut self, id: &ProductId) -> bool {
        let changed = match self.items.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        };
        self.recompute_total();
        changed
    }

    /// Subtracts one from the quantity of `id`, but never below 1.
    ///
    /// Returns false when `id` is absent or already at quantity 1.
    pub fn decrement_quantity(&mut self, id: &ProductId) -> bool {
        let changed = match self.items.iter_mut().find(|l| &l.id == id) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        };
        self.recompute_total();
        changed
    }

    /// Empties the cart. Returns false if it was already empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        self.items.clear();
        self.total = Money::zero();
        changed
    }

    /// Applies `action`, returning whether the state changed.
    pub fn apply(&mut self, action: &CartAction) -> bool {
        match action {
            CartAction::AddItem(product) => self.add_item(product),
            CartAction::RemoveItem(id) => self.remove_item(id),
            CartAction::IncrementQuantity(id) => self.increment_quantity(id),
            CartAction::DecrementQuantity(id) => self.decrement_quantity(id),
            CartAction::Clear => self.clear(),
        }
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartLine::line_total).sum();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(id: u64, price_cents: i64) -> Product {
        Product {
            id: ProductId::Numeric(id),
            title: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            category: "test".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            description: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_worked_example() {
        let mut cart = CartState::new();
        let product = test_product(1, 1000);

        cart.add_item(&product);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), Money::from_cents(1000));

        cart.add_item(&product);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(2000));

        cart.decrement_quantity(&ProductId::Numeric(1));
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), Money::from_cents(1000));

        cart.remove_item(&ProductId::Numeric(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_same_product_does_not_duplicate() {
        let mut cart = CartState::new();
        let product = test_product(1, 999);

        cart.add_item(&product);
        cart.add_item(&product);
        cart.add_item(&product);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total().cents(), 2997);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartState::new();
        cart.add_item(&test_product(3, 100));
        cart.add_item(&test_product(1, 100));
        cart.add_item(&test_product(3, 100));

        let ids: Vec<_> = cart.items().iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Numeric(3), ProductId::Numeric(1)]);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = CartState::new();
        cart.add_item(&test_product(1, 500));

        let before = cart.clone();
        assert!(!cart.decrement_quantity(&ProductId::Numeric(1)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_missing_ids_are_no_ops() {
        let mut cart = CartState::new();
        cart.add_item(&test_product(1, 500));
        let before = cart.clone();

        let missing = ProductId::Numeric(99);
        assert!(!cart.remove_item(&missing));
        assert!(!cart.increment_quantity(&missing));
        assert!(!cart.decrement_quantity(&missing));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        cart.add_item(&test_product(1, 500));
        cart.add_item(&test_product(2, 250));

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert!(!cart.clear());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut cart = CartState::new();
        let product = test_product(5, 1999);

        assert!(cart.apply(&CartAction::AddItem(product.clone())));
        assert!(cart.apply(&CartAction::IncrementQuantity(product.id.clone())));
        assert_eq!(cart.line(&product.id).map(|l| l.quantity), Some(2));
        assert!(cart.apply(&CartAction::RemoveItem(product.id.clone())));
        assert!(!cart.apply(&CartAction::Clear));
    }

    #[test]
    fn test_snapshot_layout() {
        let mut cart = CartState::new();
        let mut product = test_product(1, 1099);
        product.title = "Backpack".to_string();
        cart.add_item(&product);
        cart.add_item(&product);

        let json: serde_json::Value = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["total"], serde_json::json!(21.98));
        assert_eq!(json["items"][0]["id"], serde_json::json!(1));
        assert_eq!(json["items"][0]["price"], serde_json::json!(10.99));
        assert_eq!(json["items"][0]["quantity"], serde_json::json!(2));
    }

    #[test]
    fn test_deserialize_recomputes_total_and_normalises() {
        let json = r#"{
            "items": [
                {"id": 1, "title": "A", "price": 2.5, "image": "", "category": "c", "quantity": 2},
                {"id": 2, "title": "B", "price": 1, "image": "", "category": "c", "quantity": 0},
                {"id": 1, "title": "A", "price": 2.5, "image": "", "category": "c", "quantity": 1}
            ],
            "total": 12345
        }"#;

        let cart: CartState = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), Money::from_cents(750));
    }

    #[test]
    fn test_round_trip_reproduces_state() {
        let mut cart = CartState::new();
        cart.add_item(&test_product(1, 10995));
        cart.add_item(&test_product(2, 2230));
        cart.increment_quantity(&ProductId::Numeric(2));

        let json = serde_json::to_string(&cart).unwrap();
        let reloaded: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, cart);
    }

    // -------------------------------------------------------------------------
    // Property tests
    // -------------------------------------------------------------------------

    fn action_strategy() -> impl Strategy<Value = CartAction> {
        let id = 0u64..6;
        let price = 1i64..100_000;
        prop_oneof![
            (id.clone(), price).prop_map(|(id, cents)| CartAction::AddItem(test_product(id, cents))),
            id.clone().prop_map(|id| CartAction::RemoveItem(ProductId::Numeric(id))),
            id.clone().prop_map(|id| CartAction::IncrementQuantity(ProductId::Numeric(id))),
            id.prop_map(|id| CartAction::DecrementQuantity(ProductId::Numeric(id))),
            Just(CartAction::Clear),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_matches_lines(actions in prop::collection::vec(action_strategy(), 0..64)) {
            let mut cart = CartState::new();
            for action in &actions {
                cart.apply(action);

                let expected: i64 = cart
                    .items()
                    .iter()
                    .map(|l| l.price.cents() * i64::from(l.quantity))
                    .sum();
                prop_assert_eq!(cart.total().cents(), expected);
                prop_assert!(cart.items().iter().all(|l| l.quantity >= 1));

                let mut ids: Vec<_> = cart.items().iter().map(|l| l.id.clone()).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.items().len());
            }
        }

        #[test]
        fn prop_add_existing_increments_by_exactly_one(
            actions in prop::collection::vec(action_strategy(), 0..32),
            id in 0u64..6,
        ) {
            let mut cart = CartState::new();
            for action in &actions {
                cart.apply(action);
            }
            let product = test_product(id, 100);
            cart.add_item(&product);
            let lines_before = cart.items().len();
            let qty_before = cart.line(&product.id).map(|l| l.quantity).unwrap_or(0);

            cart.add_item(&product);
            prop_assert_eq!(cart.items().len(), lines_before);
            prop_assert_eq!(cart.line(&product.id).map(|l| l.quantity), Some(qty_before + 1));
        }

        #[test]
        fn prop_persisted_snapshot_reloads_identically(
            actions in prop::collection::vec(action_strategy(), 0..32),
        ) {
            let mut cart = CartState::new();
            for action in &actions {
                cart.apply(action);
            }
            let json = serde_json::to_string(&cart).unwrap();
            let reloaded: CartState = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(reloaded, cart);
        }
    }
}
