//! Process-wide catalog singletons.
//!
//! Each catalog is created on first access and shared for the rest of the
//! process. Initialization runs at most once even under concurrent access.

use once_cell::sync::Lazy;

use crate::adapters::memory::InMemoryCatalog;
use crate::domain::models::{CatalogVariant, StoreKind};

static PHYSICAL_CATALOG: Lazy<InMemoryCatalog> = Lazy::new(|| {
    tracing::debug!(variant = %CatalogVariant::PhysicalCatalogV1, "initializing catalog");
    InMemoryCatalog::physical()
});

static DIGITAL_CATALOG: Lazy<InMemoryCatalog> = Lazy::new(|| {
    tracing::debug!(variant = %CatalogVariant::DigitalCatalogV2, "initializing catalog");
    InMemoryCatalog::digital()
});

/// The shared physical goods catalog.
pub fn physical_catalog() -> &'static InMemoryCatalog {
    &PHYSICAL_CATALOG
}

/// The shared digital goods catalog.
pub fn digital_catalog() -> &'static InMemoryCatalog {
    &DIGITAL_CATALOG
}

/// The shared catalog backing a store kind.
pub fn catalog_for(kind: StoreKind) -> &'static InMemoryCatalog {
    match kind {
        StoreKind::Physical => physical_catalog(),
        StoreKind::Digital => digital_catalog(),
    }
}
