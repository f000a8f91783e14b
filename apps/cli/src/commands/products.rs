//! Product listing and detail.

use std::io::Write;

use shopfront_core::{FetchStatus, ProductId};
use shopfront_store::FetchOutcome;
use tracing::debug;

use super::ProductsArgs;
use crate::error::{CliError, CliResult};
use crate::render;
use crate::state::AppState;

/// Makes sure the catalog is loaded, fetching when it is not (or when
/// `refresh` is set).
pub async fn ensure_catalog(app: &AppState, refresh: bool) -> CliResult<()> {
    if !refresh && app.products.status() == FetchStatus::Loaded {
        return Ok(());
    }
    debug!(refresh, "Loading catalog");
    match app.products.fetch_products().await {
        FetchOutcome::Loaded(_) | FetchOutcome::Superseded => Ok(()),
        FetchOutcome::Failed(message) => Err(CliError::CatalogUnavailable(message)),
    }
}

/// `products [--filter TEXT] [--refresh]`
pub async fn list(app: &AppState, args: ProductsArgs, out: &mut dyn Write) -> CliResult<()> {
    ensure_catalog(app, args.refresh).await?;
    if let Some(filter) = args.filter {
        app.products.set_filter(filter);
    }

    let products = app.products.filtered();
    let filter = app.products.with_state(|s| s.filter().to_string());
    write!(out, "{}", render::product_list(&app.locale, &products, &filter))?;
    Ok(())
}

/// Maps a typed id onto the loaded catalog's ids.
pub fn catalog_id(app: &AppState, id: &ProductId) -> ProductId {
    app.products
        .with_state(|s| id.resolve(s.products().iter().map(|p| &p.id)))
}

/// `product <ID>`
pub async fn show(app: &AppState, id: &ProductId, out: &mut dyn Write) -> CliResult<()> {
    ensure_catalog(app, false).await?;
    let id = catalog_id(app, id);
    let product = app
        .products
        .product(&id)
        .ok_or(CliError::ProductNotFound(id))?;
    write!(out, "{}", render::product_detail(&app.locale, &product))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app, app_with, output, product};
    use shopfront_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_all_products() {
        let app = app();
        let mut buf = Vec::new();
        list(&app, ProductsArgs::default(), &mut buf).await.unwrap();

        let text = output(buf);
        assert!(text.starts_with("Products (3)"));
        assert!(text.contains("Fjallraven Backpack  $109.95  [men's clothing]"));
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let app = app();
        let mut buf = Vec::new();
        let args = ProductsArgs {
            filter: Some("SHIRT".to_string()),
            refresh: false,
        };
        list(&app, args, &mut buf).await.unwrap();

        let text = output(buf);
        assert!(text.contains("Slim Fit T-Shirts"));
        assert!(!text.contains("Backpack"));
    }

    #[tokio::test]
    async fn test_show_unknown_product() {
        let app = app();
        let mut buf = Vec::new();
        let err = show(&app, &ProductId::Numeric(99), &mut buf).await.unwrap_err();
        assert!(matches!(err, CliError::ProductNotFound(_)));
    }

    #[tokio::test]
    async fn test_show_digit_only_text_id() {
        let mut sku = product(0, "Gift Card", "misc", 2500);
        sku.id = ProductId::Text("1001".to_string());
        let app = app_with(Arc::new(MemoryStore::new()), Ok(vec![sku]));

        let mut buf = Vec::new();
        show(&app, &"1001".parse().unwrap(), &mut buf).await.unwrap();
        assert!(output(buf).contains("Gift Card"));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_reported() {
        let app = app_with(Arc::new(MemoryStore::new()), Err(503));
        let mut buf = Vec::new();
        let err = list(&app, ProductsArgs::default(), &mut buf).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not load products: Failed to fetch products (HTTP 503)"
        );
        assert!(buf.is_empty());
    }
}
