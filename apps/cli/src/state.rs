//! # Application State
//!
//! Every store is built once here and handed to the command handlers by
//! reference. Nothing in the binary reaches for a global.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppState                                             │
//! │                                                                         │
//! │   storage: Arc<dyn KeyValueStore>   FileStore(data_dir) | MemoryStore   │
//! │       │                                                                 │
//! │       ├──► cart:     CartStore (hydrated, persisted under cart_key)     │
//! │       ├──► theme:    ThemeSettings  ("theme")                           │
//! │       └──► locale:   LocaleSettings ("language")                        │
//! │                                                                         │
//! │   products: ProductStore ──► Arc<dyn CatalogSource> (HttpCatalog)       │
//! │   user:     UserStore (process lifetime only)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use shopfront_catalog::HttpCatalog;
use shopfront_store::{
    CartStore, CatalogSource, FileStore, KeyValueStore, LocaleSettings, MemoryStore, ProductStore,
    ThemeSettings, UserStore,
};
use tracing::info;

use crate::config::ShopfrontConfig;
use crate::error::CliResult;

pub struct AppState {
    pub cart: CartStore,
    pub products: ProductStore,
    pub user: UserStore,
    pub theme: ThemeSettings,
    pub locale: LocaleSettings,
}

impl AppState {
    /// Wires the stores over explicit storage and catalog backends.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        source: Arc<dyn CatalogSource>,
        cart_key: &str,
    ) -> Self {
        AppState {
            cart: CartStore::persistent(storage.clone(), cart_key),
            products: ProductStore::new(source),
            user: UserStore::new(),
            theme: ThemeSettings::load(storage.clone()),
            locale: LocaleSettings::load(storage),
        }
    }

    /// Builds the production wiring from configuration.
    ///
    /// `ephemeral` swaps the data directory for in-memory storage.
    pub fn from_config(config: &ShopfrontConfig, ephemeral: bool) -> CliResult<Self> {
        let storage: Arc<dyn KeyValueStore> = if ephemeral {
            info!("Using in-memory storage");
            Arc::new(MemoryStore::new())
        } else {
            let dir = config.data_dir()?;
            info!(dir = %dir.display(), "Using file storage");
            Arc::new(FileStore::open(dir)?)
        };

        let catalog = HttpCatalog::new(config.catalog_url()?, config.fetch_timeout())?;
        info!(url = %catalog.url(), "Catalog source configured");

        Ok(Self::new(storage, Arc::new(catalog), config.cart_key()))
    }
}
