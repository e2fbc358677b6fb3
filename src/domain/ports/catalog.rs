//! Catalog port.

use crate::domain::models::{CatalogVariant, ProductRecord};

/// Read-only view of a product catalog.
pub trait Catalog: Send + Sync {
    /// Which catalog variant this is.
    fn variant(&self) -> CatalogVariant;

    /// Human-readable description of the catalog connection.
    fn connection_info(&self) -> String;

    /// Products the catalog was seeded with.
    fn products(&self) -> &[ProductRecord];
}
