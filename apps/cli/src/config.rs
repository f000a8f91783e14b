//! # Shopfront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_CATALOG_URL=http://localhost:3000/products               │
//! │     SHOPFRONT_FETCH_TIMEOUT=10                                         │
//! │     SHOPFRONT_DATA_DIR=/tmp/shopfront                                  │
//! │     SHOPFRONT_CART_KEY=cart                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/shopfront/shopfront.toml (Linux)                         │
//! │     ~/Library/Application Support/dev.shopfront.shopfront/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shopfront.toml
//! [catalog]
//! url = "https://fakestoreapi.com/products"
//! timeout_secs = 30  # optional, absent = no timeout
//!
//! [storage]
//! data_dir = "/home/me/.local/share/shopfront"  # optional
//! cart_key = "cart"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shopfront_core::DEFAULT_CART_KEY;
use shopfront_store::validate_key;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::ConfigError;

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "shopfront.toml";

// =============================================================================
// Catalog Settings
// =============================================================================

/// Where products are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Product list endpoint (GET, JSON array).
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Whole-request timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_catalog_url() -> String {
    shopfront_catalog::HttpCatalog::DEFAULT_URL.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            url: default_catalog_url(),
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where durable local state lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Data directory. Defaults to the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Key the cart snapshot is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: None,
            cart_key: default_cart_key(),
        }
    }
}

// =============================================================================
// Shopfront Config
// =============================================================================

/// Complete configuration for the `shopfront` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl ShopfrontConfig {
    /// Loads configuration from file and environment, then validates it.
    ///
    /// An explicit `config_path` must exist. Without one, the platform
    /// config file is used when present and defaults otherwise.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::read(config_path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration without failing.
    ///
    /// An unreadable file falls back to defaults. Environment overrides are
    /// still applied, and each field that fails validation is reset to its
    /// default on its own, so one bad value never discards the others.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load_or_default_with(config_path, |name| std::env::var(name).ok())
    }

    fn load_or_default_with<F>(config_path: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::read(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shopfront config: {}. Using defaults.", e);
            Self::default()
        });
        config.apply_overrides(lookup);
        config.reset_invalid_fields();
        config
    }

    fn read(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => Self::from_file(&path),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading shopfront config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parses a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_catalog_url()?;
        self.check_timeout()?;
        self.check_cart_key()
    }

    /// Resets every invalid field to its default, logging each one.
    fn reset_invalid_fields(&mut self) {
        if let Err(e) = self.check_catalog_url() {
            warn!(error = %e, "Using the default catalog.url");
            self.catalog.url = default_catalog_url();
        }
        if let Err(e) = self.check_timeout() {
            warn!(error = %e, "Fetching without a timeout");
            self.catalog.timeout_secs = None;
        }
        if let Err(e) = self.check_cart_key() {
            warn!(error = %e, "Using the default storage.cart_key");
            self.storage.cart_key = default_cart_key();
        }
    }

    fn check_catalog_url(&self) -> Result<(), ConfigError> {
        let url = self.catalog_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "catalog.url must use http:// or https://, got: {}",
                self.catalog.url
            )));
        }
        Ok(())
    }

    fn check_timeout(&self) -> Result<(), ConfigError> {
        if self.catalog.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "catalog.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn check_cart_key(&self) -> Result<(), ConfigError> {
        validate_key(&self.storage.cart_key).map_err(|_| {
            ConfigError::Invalid(format!(
                "storage.cart_key {:?} must be non-empty and use only A-Z a-z 0-9 . _ -",
                self.storage.cart_key
            ))
        })
    }

    /// Applies `SHOPFRONT_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from `lookup` (an environment-like source).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SHOPFRONT_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.url = url;
        }

        if let Some(timeout) = lookup("SHOPFRONT_FETCH_TIMEOUT") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.catalog.timeout_secs = Some(secs),
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric SHOPFRONT_FETCH_TIMEOUT"),
            }
        }

        if let Some(dir) = lookup("SHOPFRONT_DATA_DIR") {
            debug!(dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(key) = lookup("SHOPFRONT_CART_KEY") {
            self.storage.cart_key = key;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Parsed catalog endpoint.
    pub fn catalog_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.catalog.url)
            .map_err(|e| ConfigError::Invalid(format!("catalog.url '{}': {}", self.catalog.url, e)))
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.catalog.timeout_secs.map(Duration::from_secs)
    }

    /// Configured data directory, or the platform data directory.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or(ConfigError::NoDataDir),
        }
    }

    pub fn cart_key(&self) -> &str {
        &self.storage.cart_key
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("dev", "shopfront", "shopfront")
}
