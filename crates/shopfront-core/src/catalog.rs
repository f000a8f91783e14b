//! # Product Catalog State
//!
//! Fetch lifecycle bookkeeping and the free-text filter.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fetch Lifecycle                                    │
//! │                                                                         │
//! │            begin_fetch()                complete_fetch(ticket, Ok)      │
//! │   Idle ─────────────────► Loading ──────────────────────────► Loaded    │
//! │                              │  ▲                                       │
//! │                              │  │ begin_fetch() (retry / refresh)       │
//! │   complete_fetch(ticket, Err)│  │                                       │
//! │                              ▼  │                                       │
//! │                            Failed { message }                           │
//! │                                                                         │
//! │  Every begin_fetch() bumps `generation`. A completion whose ticket is   │
//! │  older than the current generation is discarded: the later request      │
//! │  always wins, whichever response arrives first.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed fetch leaves the previously loaded products in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, ProductId};

// =============================================================================
// Fetch Status
// =============================================================================

/// Where the catalog fetch currently stands.
///
/// `Loading` carries no error and `Failed` always does, so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed { message: String },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// The failure message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Loaded => "loaded",
            FetchStatus::Failed { .. } => "failed",
        }
    }
}

/// Token handed out by [`ProductState::begin_fetch`].
///
/// Only the ticket from the most recent `begin_fetch` can complete the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Product State
// =============================================================================

/// The loaded catalog, its fetch status and the active filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductState {
    products: Vec<Product>,
    status: FetchStatus,
    filter: String,
    fetched_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl ProductState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as in flight.
    ///
    /// Sets `Loading` (clearing any previous error) and invalidates every
    /// ticket issued before this one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.status = FetchStatus::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Resolves the fetch identified by `ticket`.
    ///
    /// ## Behavior
    /// - Stale ticket: nothing changes, returns `false`
    /// - `Ok(products)`: products replaced wholesale, status `Loaded`
    /// - `Err(message)`: status `Failed`, products untouched
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, String>,
        completed_at: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match result {
            Ok(products) => {
                self.products = products;
                self.status = FetchStatus::Loaded;
                self.fetched_at = Some(completed_at);
            }
            Err(message) => {
                self.status = FetchStatus::Failed { message };
            }
        }
        true
    }

    /// Backs out of the fetch identified by `ticket` without a result, e.g.
    /// when the caller stopped waiting for it.
    ///
    /// Only the latest ticket of a fetch still `Loading` has an effect: the
    /// status goes back to `Loaded` if products were fetched before, `Idle`
    /// otherwise. Products are untouched.
    pub fn abandon_fetch(&mut self, ticket: FetchTicket) -> bool {
        if ticket.generation != self.generation || !self.status.is_loading() {
            return false;
        }
        self.status = if self.fetched_at.is_some() {
            FetchStatus::Loaded
        } else {
            FetchStatus::Idle
        };
        true
    }

    /// Replaces the filter text. Products and status are not touched.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Products matching the current filter, in catalog order.
    ///
    /// Matching is a case-insensitive substring test against title and
    /// category. The filter text is used as-is (no trimming), so `" "` only
    /// matches entries containing a space.
    pub fn filtered(&self) -> Vec<&Product> {
        if self.filter.is_empty() {
            return self.products.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
