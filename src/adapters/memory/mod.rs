//! In-memory backends for products and catalogs.

pub mod in_memory_catalog;
pub mod in_memory_product_store;

pub use in_memory_catalog::InMemoryCatalog;
pub use in_memory_product_store::{InMemoryProductStore, DEFAULT_STORE_LATENCY};
