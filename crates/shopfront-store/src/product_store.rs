//! # Product Store
//!
//! Owns the catalog state and drives fetches against a [`CatalogSource`].
//!
//! ## Fetch Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        fetch_products()                                 │
//! │                                                                         │
//! │  1. lock ─► begin_fetch() ─► unlock        status = Loading (sync)      │
//! │  2. source.fetch_products().await          lock NOT held                │
//! │  3. lock ─► complete_fetch(ticket, ..) ─► unlock                        │
//! │                                                                         │
//! │  If another fetch started during step 2, the ticket from step 1 is      │
//! │  stale and step 3 discards the response (FetchOutcome::Superseded).     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dropping the future during step 2 backs the fetch out through
//! `ProductState::abandon_fetch`, so the status does not stay `Loading`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use shopfront_core::{FetchStatus, FetchTicket, Product, ProductId, ProductState};
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Where products come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// How a call to [`ProductStore::fetch_products`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Products replaced; carries the new product count.
    Loaded(usize),
    /// The source failed; carries the stored error message.
    Failed(String),
    /// A later fetch started before this one resolved, so its result was
    /// dropped.
    Superseded,
}

/// Backs out of an in-flight fetch if its future is dropped before the
/// source answers.
struct PendingFetch<'a> {
    store: &'a ProductStore,
    ticket: Option<FetchTicket>,
}

impl PendingFetch<'_> {
    fn disarm(mut self) {
        self.ticket = None;
    }
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            if self.store.lock().abandon_fetch(ticket) {
                debug!(generation = ticket.generation(), "Product fetch cancelled");
            }
        }
    }
}

/// Lockable catalog state plus the source it is filled from.
pub struct ProductStore {
    state: Mutex<ProductState>,
    source: Arc<dyn CatalogSource>,
}

impl ProductStore {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        ProductStore {
            state: Mutex::new(ProductState::new()),
            source,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProductState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one fetch cycle.
    ///
    /// The `Loading` status is set before the first await point, so a caller
    /// that polls the store right after starting the future sees it.
    pub async fn fetch_products(&self) -> FetchOutcome {
        let ticket = self.lock().begin_fetch();
        debug!(generation = ticket.generation(), "Product fetch started");
        let pending = PendingFetch {
            store: self,
            ticket: Some(ticket),
        };

        let result = self
            .source
            .fetch_products()
            .await
            .map_err(|e| e.to_string());
        pending.disarm();

        let mut state = self.lock();
        let outcome = match &result {
            Ok(products) => FetchOutcome::Loaded(products.len()),
            Err(message) => FetchOutcome::Failed(message.clone()),
        };
        if !state.complete_fetch(ticket, result, Utc::now()) {
            warn!(
                generation = ticket.generation(),
                current = state.generation(),
                "Discarding stale product fetch response"
            );
            return FetchOutcome::Superseded;
        }

        match &outcome {
            FetchOutcome::Loaded(count) => debug!(count, "Product fetch loaded"),
            FetchOutcome::Failed(message) => warn!(error = %message, "Product fetch failed"),
            FetchOutcome::Superseded => {}
        }
        outcome
    }

    /// Replaces the filter text.
    pub fn set_filter(&self, filter: impl Into<String>) {
        self.lock().set_filter(filter);
    }

    pub fn clear_filter(&self) {
        self.lock().clear_filter();
    }

    /// Products matching the current filter.
    pub fn filtered(&self) -> Vec<Product> {
        self.lock().filtered().into_iter().cloned().collect()
    }

    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.lock().product(id).cloned()
    }

    pub fn status(&self) -> FetchStatus {
        self.lock().status().clone()
    }

    pub fn snapshot(&self) -> ProductState {
        self.lock().clone()
    }

    /// Executes a function with read access to the catalog state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductState) -> R,
    {
        let state = self.lock();
        f(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Money;
    use std::collections::VecDeque;
    use tokio::sync::{oneshot, Mutex as AsyncMutex};

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId::Numeric(id),
            title: title.to_string(),
            price: Money::from_cents(1000),
            category: "misc".to_string(),
            image: String::new(),
            description: String::new(),
            rating: None,
        }
    }

    /// Returns queued results in order.
    struct ScriptedSource {
        results: std::sync::Mutex<VecDeque<Result<Vec<Product>, CatalogError>>>,
    }

    impl ScriptedSource {
        fn new(results: Vec<Result<Vec<Product>, CatalogError>>) -> Arc<Self> {
            Arc::new(ScriptedSource {
                results: std::sync::Mutex::new(results.into()),
            })
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Blocks each fetch until the test releases it.
    struct GatedSource {
        gates: AsyncMutex<VecDeque<oneshot::Receiver<Result<Vec<Product>, CatalogError>>>>,
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            let gate = self.gates.lock().await.pop_front().unwrap();
            gate.await.unwrap()
        }
    }

    #[tokio::test]
    async fn test_successful_fetch() {
        let store = ProductStore::new(ScriptedSource::new(vec![Ok(vec![
            product(1, "Backpack"),
            product(2, "Shirt"),
        ])]));

        assert_eq!(store.status(), FetchStatus::Idle);
        assert_eq!(store.fetch_products().await, FetchOutcome::Loaded(2));
        assert_eq!(store.status(), FetchStatus::Loaded);
        assert_eq!(store.filtered().len(), 2);
        assert!(store.snapshot().fetched_at().is_some());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_products() {
        let store = ProductStore::new(ScriptedSource::new(vec![
            Ok(vec![product(1, "Backpack")]),
            Err(CatalogError::Status { status: 503 }),
        ]));

        store.fetch_products().await;
        let outcome = store.fetch_products().await;

        assert_eq!(
            outcome,
            FetchOutcome::Failed("Failed to fetch products (HTTP 503)".to_string())
        );
        assert_eq!(
            store.with_state(|s| s.error().map(str::to_string)),
            Some("Failed to fetch products (HTTP 503)".to_string())
        );
        assert_eq!(store.filtered().len(), 1);
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_in_flight() {
        let (tx, rx) = oneshot::channel();
        let store = Arc::new(ProductStore::new(Arc::new(GatedSource {
            gates: AsyncMutex::new(VecDeque::from(vec![rx])),
        })));

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });

        while !store.status().is_loading() {
            tokio::task::yield_now().await;
        }
        assert!(store.with_state(|s| s.error().is_none()));

        tx.send(Ok(vec![product(7, "Lamp")])).unwrap();
        assert_eq!(task.await.unwrap(), FetchOutcome::Loaded(1));
        assert!(store.product(&ProductId::Numeric(7)).is_some());
    }

    #[tokio::test]
    async fn test_dropped_fetch_does_not_stay_loading() {
        let (_tx, rx) = oneshot::channel();
        let store = Arc::new(ProductStore::new(Arc::new(GatedSource {
            gates: AsyncMutex::new(VecDeque::from(vec![rx])),
        })));

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        while !store.status().is_loading() {
            tokio::task::yield_now().await;
        }

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());
        assert_eq!(store.status(), FetchStatus::Idle);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let store = Arc::new(ProductStore::new(Arc::new(GatedSource {
            gates: AsyncMutex::new(VecDeque::from(vec![first_rx, second_rx])),
        })));

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        while store.snapshot().generation() < 1 {
            tokio::task::yield_now().await;
        }
        let second = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_products().await }
        });
        while store.snapshot().generation() < 2 {
            tokio::task::yield_now().await;
        }

        second_tx.send(Ok(vec![product(2, "New")])).unwrap();
        assert_eq!(second.await.unwrap(), FetchOutcome::Loaded(1));

        first_tx.send(Ok(vec![product(1, "Old"), product(3, "Older")])).unwrap();
        assert_eq!(first.await.unwrap(), FetchOutcome::Superseded);

        let titles: Vec<_> = store.filtered().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["New".to_string()]);
    }

    #[tokio::test]
    async fn test_filter_through_store() {
        let store = ProductStore::new(ScriptedSource::new(vec![Ok(vec![
            product(1, "Cotton Shirt"),
            product(2, "Backpack"),
        ])]));
        store.fetch_products().await;

        store.set_filter("shirt");
        assert_eq!(store.filtered().len(), 1);
        store.clear_filter();
        assert_eq!(store.filtered().len(), 2);
    }
}
