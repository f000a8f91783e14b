//! Cart commands.
//!
//! `add` needs the product's display fields, so it loads the catalog first.
//! The other actions work on ids already in the cart and never touch the
//! network. Unknown ids on remove / inc / dec are silent no-ops.

use std::io::Write;

use shopfront_core::ProductId;
use tracing::debug;

use super::products::{catalog_id, ensure_catalog};
use super::CartCommand;
use crate::error::{CliError, CliResult};
use crate::render;
use crate::state::AppState;

pub async fn run(app: &AppState, command: CartCommand, out: &mut dyn Write) -> CliResult<()> {
    debug!(?command, "cart command");
    let cart = match command {
        CartCommand::Show => app.cart.snapshot(),
        CartCommand::Add { id } => {
            ensure_catalog(app, false).await?;
            let id = catalog_id(app, &id);
            let product = app
                .products
                .product(&id)
                .ok_or(CliError::ProductNotFound(id))?;
            app.cart.add_item(&product)
        }
        CartCommand::Remove { id } => app.cart.remove_item(&cart_id(app, &id)),
        CartCommand::Inc { id } => app.cart.increment_quantity(&cart_id(app, &id)),
        CartCommand::Dec { id } => app.cart.decrement_quantity(&cart_id(app, &id)),
        CartCommand::Clear => app.cart.clear_cart(),
    };
    write!(out, "{}", render::cart(&app.locale, &cart))?;
    Ok(())
}

/// Maps a typed id onto the ids already in the cart.
fn cart_id(app: &AppState, id: &ProductId) -> ProductId {
    let cart = app.cart.snapshot();
    id.resolve(cart.items().iter().map(|line| &line.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app, app_with, catalog, output, product};
    use shopfront_core::Money;
    use shopfront_store::{FileStore, KeyValueStore};
    use std::sync::Arc;

    async fn exec(app: &AppState, command: CartCommand) -> String {
        let mut buf = Vec::new();
        run(app, command, &mut buf).await.unwrap();
        output(buf)
    }

    #[tokio::test]
    async fn test_worked_example_through_commands() {
        let app = app();
        let id = ProductId::Numeric(1);

        exec(&app, CartCommand::Add { id: id.clone() }).await;
        let text = exec(&app, CartCommand::Add { id: id.clone() }).await;
        assert!(text.contains("x2"));
        assert_eq!(app.cart.snapshot().total(), Money::from_cents(21990));

        exec(&app, CartCommand::Dec { id: id.clone() }).await;
        assert_eq!(app.cart.snapshot().total(), Money::from_cents(10995));

        let text = exec(&app, CartCommand::Remove { id }).await;
        assert_eq!(text, "Your cart is empty\n");
    }

    #[tokio::test]
    async fn test_digit_only_text_ids_are_reachable() {
        let mut sku = product(0, "Gift Card", "misc", 2500);
        sku.id = ProductId::Text("1001".to_string());
        let app = app_with(Arc::new(shopfront_store::MemoryStore::new()), Ok(vec![sku]));
        let typed: ProductId = "1001".parse().unwrap();

        exec(&app, CartCommand::Add { id: typed.clone() }).await;
        exec(&app, CartCommand::Inc { id: typed.clone() }).await;
        let cart = app.cart.snapshot();
        assert_eq!(cart.items()[0].id, ProductId::Text("1001".to_string()));
        assert_eq!(cart.items()[0].quantity, 2);

        let text = exec(&app, CartCommand::Remove { id: typed }).await;
        assert_eq!(text, "Your cart is empty\n");
    }

    #[tokio::test]
    async fn test_add_unknown_product_fails() {
        let app = app();
        let mut buf = Vec::new();
        let err = run(&app, CartCommand::Add { id: ProductId::Numeric(404) }, &mut buf)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ProductNotFound(ProductId::Numeric(404))));
        assert!(app.cart.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_add_needs_catalog() {
        let app = app_with(Arc::new(shopfront_store::MemoryStore::new()), Err(500));
        let mut buf = Vec::new();
        let err = run(&app, CartCommand::Add { id: ProductId::Numeric(1) }, &mut buf)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_cart_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());

        let first = app_with(storage.clone(), Ok(catalog()));
        exec(&first, CartCommand::Add { id: ProductId::Numeric(2) }).await;
        exec(&first, CartCommand::Inc { id: ProductId::Numeric(2) }).await;
        drop(first);

        // Second run cannot reach the catalog, but the cart still shows.
        let second = app_with(storage, Err(503));
        let text = exec(&second, CartCommand::Show).await;
        assert!(text.contains("Slim Fit T-Shirts"));
        assert!(text.ends_with("Total: $44.60\n"));
    }
}
