//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::sync::Arc;
use std::time::Duration;

use storefront::adapters::memory::{InMemoryCatalog, InMemoryProductStore};
use storefront::domain::models::Config;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Store A (physical catalog) without simulated latency.
#[allow(dead_code)]
pub fn physical_store() -> Arc<InMemoryProductStore> {
    Arc::new(
        InMemoryProductStore::from_catalog("store-a", &InMemoryCatalog::physical())
            .with_latency(Duration::ZERO),
    )
}

/// Store B (digital catalog) without simulated latency.
#[allow(dead_code)]
pub fn digital_store() -> Arc<InMemoryProductStore> {
    Arc::new(
        InMemoryProductStore::from_catalog("store-b", &InMemoryCatalog::digital())
            .with_latency(Duration::ZERO),
    )
}

/// Default configuration with store latency disabled.
#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.store.latency_ms = 0;
    config
}
