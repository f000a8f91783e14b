//! # Translations
//!
//! Static English/Hindi dictionary behind the locale collaborator.
//!
//! `translate` never fails: a key without a translation comes back verbatim,
//! so a missing entry shows up in the UI as its key instead of an empty label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Returns the other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    /// ISO 639-1 code, also the stored form.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Every key both dictionaries carry.
pub const KEYS: &[&str] = &[
    "welcome",
    "home",
    "about",
    "products",
    "contact",
    "login",
    "dashboard",
    "cart",
    "logout",
    "welcomeMessage",
    "description",
    "features",
    "routing",
    "stateManagement",
    "authentication",
    "darkMode",
    "aboutTitle",
    "aboutDescription",
    "techStack",
    "searchProducts",
    "addToCart",
    "removeFromCart",
    "clearCart",
    "cartEmpty",
    "total",
    "items",
    "loading",
    "error",
    "noResults",
];

/// Translates `key` into `language`, falling back to the key itself.
///
/// ```rust
/// use shopfront_core::i18n::{translate, Language};
///
/// assert_eq!(translate(Language::En, "cart"), "Cart");
/// assert_eq!(translate(Language::Hi, "cart"), "कार्ट");
/// assert_eq!(translate(Language::Hi, "checkout"), "checkout");
/// ```
pub fn translate(language: Language, key: &str) -> &str {
    let found = match language {
        Language::En => english(key),
        Language::Hi => hindi(key),
    };
    found.unwrap_or(key)
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "welcome" => "Welcome",
        "home" => "Home",
        "about" => "About",
        "products" => "Products",
        "contact" => "Contact",
        "login" => "Login",
        "dashboard" => "Dashboard",
        "cart" => "Cart",
        "logout" => "Logout",
        "welcomeMessage" => "Welcome to Shopfront",
        "description" => "A storefront with a persistent cart and a searchable catalog",
        "features" => "Features",
        "routing" => "Navigation",
        "stateManagement" => "State Management",
        "authentication" => "Authentication",
        "darkMode" => "Dark Mode",
        "aboutTitle" => "About This Project",
        "aboutDescription" => "Cart, catalog and user state kept in explicit stores",
        "techStack" => "Technology Stack",
        "searchProducts" => "Search products...",
        "addToCart" => "Add to Cart",
        "removeFromCart" => "Remove",
        "clearCart" => "Clear Cart",
        "cartEmpty" => "Your cart is empty",
        "total" => "Total",
        "items" => "items",
        "loading" => "Loading...",
        "error" => "Error",
        "noResults" => "No products found",
        _ => return None,
    };
    Some(text)
}

fn hindi(key: &str) -> Option<&'static str> {
    let text = match key {
        "welcome" => "स्वागत है",
        "home" => "होम",
        "about" => "के बारे में",
        "products" => "उत्पाद",
        "contact" => "संपर्क करें",
        "login" => "लॉगिन",
        "dashboard" => "डैशबोर्ड",
        "cart" => "कार्ट",
        "logout" => "लॉगआउट",
        "welcomeMessage" => "Shopfront में आपका स्वागत है",
        "description" => "स्थायी कार्ट और खोजने योग्य कैटलॉग वाला स्टोरफ्रंट",
        "features" => "विशेषताएं",
        "routing" => "नेविगेशन",
        "stateManagement" => "स्टेट मैनेजमेंट",
        "authentication" => "प्रमाणीकरण",
        "darkMode" => "डार्क मोड",
        "aboutTitle" => "इस परियोजना के बारे में",
        "aboutDescription" => "कार्ट, कैटलॉग और उपयोगकर्ता स्टेट अलग स्टोर में रखे जाते हैं",
        "techStack" => "प्रौद्योगिकी स्टैक",
        "searchProducts" => "उत्पाद खोजें...",
        "addToCart" => "कार्ट में डालें",
        "removeFromCart" => "हटाएं",
        "clearCart" => "कार्ट साफ़ करें",
        "cartEmpty" => "आपका कार्ट खाली है",
        "total" => "कुल",
        "items" => "आइटम",
        "loading" => "लोड हो रहा है...",
        "error" => "त्रुटि",
        "noResults" => "कोई उत्पाद नहीं मिला",
        _ => return None,
    };
    Some(text)
}
