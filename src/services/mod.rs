pub mod catalog_registry;
pub mod pricing;
pub mod product_access_service;
pub mod product_builder;

pub use catalog_registry::{catalog_for, digital_catalog, physical_catalog};
pub use pricing::{metadata_discount, price_with, tag_rules};
pub use product_access_service::ProductAccessService;
pub use product_builder::CatalogProductBuilder;
