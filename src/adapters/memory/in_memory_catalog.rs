//! In-memory catalogs seeded with the store products.

use rust_decimal::Decimal;

use crate::domain::models::{CatalogVariant, ProductRecord};
use crate::domain::ports::Catalog;

/// Catalog holding a fixed product list for one variant.
#[derive(Debug)]
pub struct InMemoryCatalog {
    variant: CatalogVariant,
    products: Vec<ProductRecord>,
}

impl InMemoryCatalog {
    pub fn new(variant: CatalogVariant, products: Vec<ProductRecord>) -> Self {
        Self { variant, products }
    }

    /// Catalog for store A with its seed products.
    pub fn physical() -> Self {
        Self::new(
            CatalogVariant::PhysicalCatalogV1,
            vec![
                ProductRecord::new("SKU-001", "Camiseta Polo", Decimal::new(799, 1)),
                ProductRecord::new("SKU-002", "Tênis Runner", Decimal::new(3499, 1)),
            ],
        )
    }

    /// Catalog for store B with its seed products.
    pub fn digital() -> Self {
        Self::new(
            CatalogVariant::DigitalCatalogV2,
            vec![
                ProductRecord::new("SKU-003", "Curso Python", Decimal::new(1999, 1)),
                ProductRecord::new("SKU-004", "Ebook", Decimal::new(299, 1)),
            ],
        )
    }
}

impl Catalog for InMemoryCatalog {
    fn variant(&self) -> CatalogVariant {
        self.variant
    }

    fn connection_info(&self) -> String {
        format!(
            "InMemoryCatalogSingleton V{} - variant={}",
            self.variant.generation(),
            self.variant
        )
    }

    fn products(&self) -> &[ProductRecord] {
        &self.products
    }
}
