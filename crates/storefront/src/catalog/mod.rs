//! Product catalog loaded once at startup.
//!
//! # Architecture
//!
//! - [`CatalogClient`] issues a single GET against the configured endpoint
//!   and parses the JSON array into core [`Product`]s
//! - [`Catalog`] is the shared, cheaply cloneable view handlers read from
//! - [`load_async`] spawns the one background fetch that moves the catalog
//!   from `Loading` to `Ready` (or `Failed`)
//!
//! The app starts serving immediately; until the fetch resolves the product
//! page shows a loading notice. There is no retry and no cache: a failed
//! fetch stays failed until the process restarts.

mod client;
mod loader;

use std::sync::{Arc, PoisonError, RwLock};

use shopcart_core::{Product, ProductId};
use thiserror::Error;

pub use client::CatalogClient;
pub use loader::load_async;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog fetch currently stands.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// The startup fetch has not resolved yet.
    #[default]
    Loading,
    /// Products in the order the endpoint returned them.
    Ready(Arc<[Product]>),
    /// The fetch failed; holds a description for logs and readiness checks.
    Failed(String),
}

/// Shared catalog handle.
///
/// Starts in [`CatalogState::Loading`] and is written exactly once by the
/// loader task.
#[derive(Clone, Default)]
pub struct Catalog {
    inner: Arc<RwLock<CatalogState>>,
}

impl Catalog {
    /// Create a catalog that is still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that is already populated.
    #[must_use]
    pub fn ready(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogState::Ready(products.into()))),
        }
    }

    /// Snapshot of the current state.
    ///
    /// The lock is released before returning; the product list is shared
    /// through an `Arc`, so this is cheap.
    #[must_use]
    pub fn state(&self) -> CatalogState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the product list is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state(), CatalogState::Ready(_))
    }

    /// Look up a product by id.
    ///
    /// Returns `None` when the catalog is not ready or has no such product.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<Product> {
        match self.state() {
            CatalogState::Ready(products) => products.iter().find(|p| p.id == id).cloned(),
            CatalogState::Loading | CatalogState::Failed(_) => None,
        }
    }

    fn set(&self, state: CatalogState) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub(crate) fn set_ready(&self, products: Vec<Product>) {
        self.set(CatalogState::Ready(products.into()));
    }

    pub(crate) fn set_failed(&self, reason: String) {
        self.set(CatalogState::Failed(reason));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopcart_core::Price;

    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::new(Decimal::new(199, 2)).unwrap(),
            image: format!("https://example.com/{id}.png"),
            description: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn test_new_catalog_is_loading() {
        let catalog = Catalog::new();
        assert!(matches!(catalog.state(), CatalogState::Loading));
        assert!(!catalog.is_ready());
        assert!(catalog.find(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_ready_catalog_finds_products() {
        let catalog = Catalog::ready(vec![product(1), product(2)]);
        assert!(catalog.is_ready());
        assert_eq!(catalog.find(ProductId::new(2)).unwrap().title, "Product 2");
        assert!(catalog.find(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let catalog = Catalog::new();
        let handle = catalog.clone();

        handle.set_ready(vec![product(1)]);
        assert!(catalog.is_ready());

        handle.set_failed("boom".to_string());
        assert!(matches!(catalog.state(), CatalogState::Failed(reason) if reason == "boom"));
    }
}
