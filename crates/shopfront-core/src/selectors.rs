//! # Selectors
//!
//! Read-only projections over the three state slices. Every derived value is
//! recomputed by a linear scan on each call.

use crate::cart::{CartLine, CartState};
use crate::catalog::ProductState;
use crate::money::Money;
use crate::types::{Identity, Product, ProductId};
use crate::user::{Preferences, UserState};

// =============================================================================
// Cart
// =============================================================================

pub fn cart_items(cart: &CartState) -> &[CartLine] {
    cart.items()
}

pub fn cart_total(cart: &CartState) -> Money {
    cart.total()
}

/// Σ quantity over all lines (the header badge count).
pub fn item_count(cart: &CartState) -> u64 {
    cart.items().iter().map(|l| u64::from(l.quantity)).sum()
}

/// Price × quantity for one line.
pub fn line_subtotal(line: &CartLine) -> Money {
    line.line_total()
}

// =============================================================================
// Products
// =============================================================================

pub fn filtered_products(products: &ProductState) -> Vec<&Product> {
    products.filtered()
}

pub fn product_by_id<'a>(products: &'a ProductState, id: &ProductId) -> Option<&'a Product> {
    products.product(id)
}

pub fn is_loading(products: &ProductState) -> bool {
    products.is_loading()
}

pub fn fetch_error(products: &ProductState) -> Option<&str> {
    products.error()
}

// =============================================================================
// User
// =============================================================================

pub fn current_user(user: &UserState) -> Option<&Identity> {
    user.current_user.as_ref()
}

pub fn is_authenticated(user: &UserState) -> bool {
    user.is_authenticated()
}

pub fn preferences(user: &UserState) -> &Preferences {
    &user.preferences
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: u64, cents: i64) -> Product {
        Product {
            id: ProductId::Numeric(id),
            title: format!("Item {}", id),
            price: Money::from_cents(cents),
            category: "misc".to_string(),
            image: String::new(),
            description: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_cart_selectors() {
        let mut cart = CartState::new();
        cart.add_item(&product(1, 1099));
        cart.add_item(&product(1, 1099));
        cart.add_item(&product(2, 250));

        assert_eq!(item_count(&cart), 3);
        assert_eq!(cart_items(&cart).len(), 2);
        assert_eq!(cart_total(&cart), Money::from_cents(2448));
        assert_eq!(line_subtotal(&cart_items(&cart)[0]), Money::from_cents(2198));
    }

    #[test]
    fn test_product_selectors() {
        let mut state = ProductState::new();
        let ticket = state.begin_fetch();
        assert!(is_loading(&state));
        assert_eq!(fetch_error(&state), None);

        state.complete_fetch(ticket, Ok(vec![product(1, 100), product(2, 200)]), Utc::now());
        assert!(!is_loading(&state));
        assert_eq!(filtered_products(&state).len(), 2);
        assert!(product_by_id(&state, &ProductId::Numeric(2)).is_some());
    }

    #[test]
    fn test_user_selectors() {
        let mut user = UserState::new();
        assert!(!is_authenticated(&user));
        assert!(current_user(&user).is_none());
        assert!(!preferences(&user).dark_mode);

        user.set_user(Identity::new("Asha"));
        assert!(is_authenticated(&user));
        assert_eq!(current_user(&user).map(|u| u.name.as_str()), Some("Asha"));
    }
}
