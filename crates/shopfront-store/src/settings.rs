//! # Theme and Locale Settings
//!
//! Both values are read once at construction and written back on every
//! toggle. They are stored as bare strings (`"dark"`, `"hi"`), not JSON.
//!
//! A missing or unrecognised stored value falls back to the default
//! (`light`, `en`). Storage failures are logged and dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopfront_core::{i18n, Language, Theme, LANGUAGE_KEY, THEME_KEY};
use tracing::warn;

use crate::storage::KeyValueStore;

/// Reads a stored setting, falling back to `T::default()`.
fn load_setting<T>(storage: &dyn KeyValueStore, key: &str) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match storage.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            warn!(key, value = %raw, error = %e, "Ignoring unrecognised stored setting");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored setting");
            T::default()
        }
    }
}

fn store_setting(storage: &dyn KeyValueStore, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        warn!(key, value, error = %e, "Failed to persist setting");
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Persisted light/dark theme.
pub struct ThemeSettings {
    storage: Arc<dyn KeyValueStore>,
    theme: Mutex<Theme>,
}

impl ThemeSettings {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let theme = load_setting(storage.as_ref(), THEME_KEY);
        ThemeSettings {
            storage,
            theme: Mutex::new(theme),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Theme> {
        self.theme.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn theme(&self) -> Theme {
        *self.lock()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Flips the theme and persists it. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let mut theme = self.lock();
        *theme = theme.toggle();
        store_setting(self.storage.as_ref(), THEME_KEY, theme.as_str());
        *theme
    }
}

// =============================================================================
// Locale
// =============================================================================

/// Persisted UI language plus the translation lookup.
pub struct LocaleSettings {
    storage: Arc<dyn KeyValueStore>,
    language: Mutex<Language>,
}

impl LocaleSettings {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let language = load_setting(storage.as_ref(), LANGUAGE_KEY);
        LocaleSettings {
            storage,
            language: Mutex::new(language),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Language> {
        self.language.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn language(&self) -> Language {
        *self.lock()
    }

    /// Switches between `en` and `hi` and persists the choice.
    pub fn toggle(&self) -> Language {
        let mut language = self.lock();
        *language = language.toggle();
        store_setting(self.storage.as_ref(), LANGUAGE_KEY, language.code());
        *language
    }

    /// Translates `key` into the current language.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.language(), key)
    }
}
