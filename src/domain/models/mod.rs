//! Domain models for the virtual store.

pub mod catalog;
pub mod config;
pub mod pricing;
pub mod product;

pub use catalog::{CatalogProduct, CatalogVariant, ProductKind};
pub use config::{Config, LoggingConfig, ProxyConfig, StoreConfig};
pub use pricing::{PricingRule, ProductElement, CLEARANCE_TAG, DISCOUNT_PCT_KEY};
pub use product::{ProductRecord, StoreKind};
