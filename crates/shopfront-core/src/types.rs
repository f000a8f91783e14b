//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Identity     │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ProductId) │   │  id (UUID)      │   │  Light          │       │
//! │  │  title          │   │  name           │   │  Dark           │       │
//! │  │  price (Money)  │   │  email?         │   └─────────────────┘       │
//! │  │  category       │   └─────────────────┘                              │
//! │  │  image, desc    │                                                    │
//! │  │  rating?        │   Cart, catalog and user state live in their      │
//! │  └─────────────────┘   own modules (cart.rs, catalog.rs, user.rs)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are externally sourced and read-only to this system: nothing in
//! the workspace mutates a `Product` after it is decoded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Opaque product identifier.
///
/// The public catalog uses integers; other catalogs use strings. Both forms
/// round-trip unchanged through the persisted cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ProductId {
    /// Integer id (`1`).
    Numeric(#[ts(type = "number")] u64),
    /// Free-form id (`"sku-1"`).
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Numeric(n) => f.pad(&n.to_string()),
            ProductId::Text(s) => f.pad(s),
        }
    }
}

impl ProductId {
    /// Maps an id typed by a user onto one of the `known` ids.
    ///
    /// Typed text cannot tell `1001` from `"1001"`, so an exact match wins
    /// and otherwise the first known id with the same textual form is used.
    /// With no match, `self` comes back unchanged.
    pub fn resolve<'a>(&self, known: impl IntoIterator<Item = &'a ProductId>) -> ProductId {
        let mut same_text = None;
        for id in known {
            if id == self {
                return id.clone();
            }
            if same_text.is_none() && id.to_string() == self.to_string() {
                same_text = Some(id);
            }
        }
        same_text.unwrap_or(self).clone()
    }
}

impl FromStr for ProductId {
    type Err = CoreError;

    /// All-digit input becomes `Numeric`, anything else non-empty is `Text`.
    /// Use [`ProductId::resolve`] to match it against catalog ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoreError::InvalidProductId(s.to_string()));
        }
        match s.parse::<u64>() {
            Ok(n) => Ok(ProductId::Numeric(n)),
            Err(_) => Ok(ProductId::Text(s.to_string())),
        }
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Numeric(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// Customer rating summary as returned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Unit price.
    pub price: Money,

    /// Category name (searched by the filter alongside the title).
    pub category: String,

    /// Image URI.
    pub image: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<Rating>,
}

// =============================================================================
// Identity
// =============================================================================

/// A signed-in identity, as handed over by the authentication collaborator.
///
/// No shape validation is applied: whatever the auth flow produces is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,
}

impl Identity {
    /// Creates an identity with a freshly generated id (stub sign-in).
    pub fn new(name: impl Into<String>) -> Self {
        Identity {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
        }
    }

    /// Attaches an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Colour theme exposed by the theme collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored/displayed name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parsing() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::Numeric(42));
        assert_eq!(
            "sku-1".parse::<ProductId>().unwrap(),
            ProductId::Text("sku-1".to_string())
        );
        assert!("  ".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_resolve_matches_textual_form() {
        let known = vec![
            ProductId::Text("1001".to_string()),
            ProductId::Numeric(7),
            ProductId::Text("sku-1".to_string()),
        ];

        let typed: ProductId = "1001".parse().unwrap();
        assert_eq!(typed, ProductId::Numeric(1001));
        assert_eq!(typed.resolve(&known), ProductId::Text("1001".to_string()));

        assert_eq!(ProductId::Numeric(7).resolve(&known), ProductId::Numeric(7));
        assert_eq!(ProductId::Numeric(8).resolve(&known), ProductId::Numeric(8));
    }

    #[test]
    fn test_resolve_prefers_exact_match() {
        let known = vec![ProductId::Text("5".to_string()), ProductId::Numeric(5)];
        assert_eq!(ProductId::Numeric(5).resolve(&known), ProductId::Numeric(5));
    }

    #[test]
    fn test_product_id_json_forms() {
        let numeric: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, ProductId::Numeric(7));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "7");

        let text: ProductId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(text, ProductId::Text("abc".to_string()));
    }

    #[test]
    fn test_product_decodes_catalog_payload() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Numeric(1));
        assert_eq!(product.price.cents(), 10995);
        assert_eq!(product.rating.map(|r| r.count), Some(120));
    }

    #[test]
    fn test_product_description_and_rating_are_optional() {
        let json = r#"{"id":"x","title":"T","price":1,"category":"c","image":"i"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.description.is_empty());
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_identity_new_generates_id() {
        let a = Identity::new("Asha");
        let b = Identity::new("Asha").with_email("asha@example.com");
        assert_ne!(a.id, b.id);
        assert_eq!(b.email.as_deref(), Some("asha@example.com"));
    }
}
