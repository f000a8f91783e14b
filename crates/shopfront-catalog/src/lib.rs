//! # shopfront-catalog: HTTP Product Source
//!
//! [`HttpCatalog`] fetches the product list with one `GET` and decodes the
//! JSON array body into [`Product`]s.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopfront_catalog::HttpCatalog;
//! use shopfront_store::ProductStore;
//!
//! let catalog = HttpCatalog::new(HttpCatalog::DEFAULT_URL.parse()?, None)?;
//! let products = ProductStore::new(Arc::new(catalog));
//! products.fetch_products().await;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use shopfront_core::Product;
use shopfront_store::{CatalogError, CatalogSource};
use tracing::debug;
use url::Url;

/// Catalog client over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: Url,
}

impl HttpCatalog {
    /// Public demo catalog.
    pub const DEFAULT_URL: &'static str = "https://fakestoreapi.com/products";

    /// Creates a client for `url`.
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Transport` if the HTTP client fails to build.
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;
        Ok(HttpCatalog { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(url = %self.url, "Fetching products");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}

fn transport_error(e: reqwest::Error) -> CatalogError {
    CatalogError::Transport(e.to_string())
}
