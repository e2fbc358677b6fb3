//! In-memory product store acting as the real subject behind proxies.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{info, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::ProductRecord;
use crate::domain::ports::{Catalog, ProductSubject};

/// Default simulated latency for a store lookup.
pub const DEFAULT_STORE_LATENCY: Duration = Duration::from_millis(20);

/// Fixed SKU -> product mapping, read-only after construction.
///
/// Every lookup sleeps for the configured latency before reading, standing
/// in for the round trip a real backend would make.
#[derive(Debug)]
pub struct InMemoryProductStore {
    label: String,
    products: HashMap<String, ProductRecord>,
    latency: Duration,
    accesses: AtomicU64,
}

impl InMemoryProductStore {
    /// Create a store with the default latency.
    pub fn new(label: impl Into<String>, products: impl IntoIterator<Item = ProductRecord>) -> Self {
        Self {
            label: label.into(),
            products: products
                .into_iter()
                .map(|p| (p.sku.clone(), p))
                .collect(),
            latency: DEFAULT_STORE_LATENCY,
            accesses: AtomicU64::new(0),
        }
    }

    /// Create a store seeded with a catalog's products.
    pub fn from_catalog(label: impl Into<String>, catalog: &dyn Catalog) -> Self {
        Self::new(label, catalog.products().iter().cloned())
    }

    /// Override the simulated latency. `Duration::ZERO` disables it.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of lookups that reached this store.
    pub fn access_count(&self) -> u64 {
        self.accesses.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProductSubject for InMemoryProductStore {
    #[instrument(skip(self), fields(store = %self.label))]
    async fn fetch(&self, sku: &str) -> DomainResult<Option<ProductRecord>> {
        self.simulate_latency().await;
        self.accesses.fetch_add(1, Ordering::SeqCst);
        info!(store = %self.label, sku, "fetching product from store");
        Ok(self.products.get(sku).cloned())
    }
}
