//! Storefront - virtual store product access
//!
//! Storefront serves product records from in-memory stores through access
//! proxies that cache successful lookups and optionally gate requests on a
//! token. Around that core it provides process-wide catalog singletons, a
//! product builder and pluggable pricing rules.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and port traits
//! - **Adapters** (`adapters`): In-memory stores and access proxies
//! - **Service Layer** (`services`): Wiring, catalogs, builder and pricing
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use storefront::adapters::memory::{InMemoryCatalog, InMemoryProductStore};
//! use storefront::adapters::proxy::AccessProxy;
//!
//! # async fn run() -> storefront::DomainResult<()> {
//! let store = Arc::new(InMemoryProductStore::from_catalog("store-b", &InMemoryCatalog::digital()));
//! let proxy = AccessProxy::token_gated("digital-proxy", store, "valid-token");
//!
//! let course = proxy.fetch("SKU-003", "valid-token").await?;
//! assert!(course.is_some());
//! assert!(proxy.fetch("SKU-004", "bad-token").await.is_err());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::memory::{InMemoryCatalog, InMemoryProductStore};
pub use adapters::proxy::{AccessPolicy, AccessProxy};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CatalogProduct, CatalogVariant, Config, PricingRule, ProductElement, ProductKind,
    ProductRecord, StoreKind,
};
pub use domain::ports::{Catalog, ProductBuilder, ProductSubject};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CatalogProductBuilder, ProductAccessService};
