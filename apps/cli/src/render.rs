//! Plain-text views. Labels go through the locale settings.

use std::fmt::Write as _;

use shopfront_core::selectors;
use shopfront_core::{CartState, Identity, Preferences, Product, Theme};
use shopfront_store::LocaleSettings;

/// One catalog row: `#1  Backpack  $109.95  [men's clothing]`.
pub fn product_row(product: &Product) -> String {
    format!(
        "#{:<4} {}  {}  [{}]",
        product.id, product.title, product.price, product.category
    )
}

pub fn product_list(locale: &LocaleSettings, products: &[Product], filter: &str) -> String {
    if products.is_empty() {
        return format!("{}\n", locale.translate("noResults"));
    }
    let mut out = String::new();
    let heading = locale.translate("products");
    if filter.is_empty() {
        let _ = writeln!(out, "{} ({})", heading, products.len());
    } else {
        let _ = writeln!(out, "{} ({}) \"{}\"", heading, products.len(), filter);
    }
    for product in products {
        let _ = writeln!(out, "{}", product_row(product));
    }
    out
}

pub fn product_detail(locale: &LocaleSettings, product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", product.id, product.title);
    let _ = writeln!(out, "  {}  [{}]", product.price, product.category);
    if let Some(rating) = product.rating {
        let _ = writeln!(out, "  ★ {:.1} ({})", rating.rate, rating.count);
    }
    if !product.description.is_empty() {
        let _ = writeln!(out, "  {}", product.description);
    }
    if !product.image.is_empty() {
        let _ = writeln!(out, "  {}", product.image);
    }
    let _ = writeln!(out, "  → shopfront cart add {}  ({})", product.id, locale.translate("addToCart"));
    out
}

/// Cart lines with per-line subtotals and the footer total.
pub fn cart(locale: &LocaleSettings, cart: &CartState) -> String {
    if cart.is_empty() {
        return format!("{}\n", locale.translate("cartEmpty"));
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} {})",
        locale.translate("cart"),
        selectors::item_count(cart),
        locale.translate("items")
    );
    for line in selectors::cart_items(cart) {
        let _ = writeln!(
            out,
            "#{:<4} {}  {} x{}  {}",
            line.id,
            line.title,
            line.price,
            line.quantity,
            selectors::line_subtotal(line)
        );
    }
    let _ = writeln!(
        out,
        "{}: {}",
        locale.translate("total"),
        selectors::cart_total(cart)
    );
    out
}

pub fn theme(locale: &LocaleSettings, theme: Theme) -> String {
    format!("{}: {}\n", locale.translate("darkMode"), if theme.is_dark() { "on" } else { "off" })
}

pub fn language(locale: &LocaleSettings) -> String {
    format!("{} ({})\n", locale.translate("welcome"), locale.language())
}

pub fn identity(locale: &LocaleSettings, user: Option<&Identity>) -> String {
    match user {
        Some(identity) => match &identity.email {
            Some(email) => format!("{} <{}> ({})\n", identity.name, email, identity.id),
            None => format!("{} ({})\n", identity.name, identity.id),
        },
        None => format!("{}?\n", locale.translate("login")),
    }
}

pub fn preferences(locale: &LocaleSettings, prefs: &Preferences) -> String {
    format!(
        "{}: {}\nlanguage: {}\n",
        locale.translate("darkMode"),
        prefs.dark_mode,
        prefs.language
    )
}
