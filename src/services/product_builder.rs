//! Builder for physical and digital catalog products.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::domain::models::{CatalogProduct, ProductKind};
use crate::domain::ports::ProductBuilder;

/// Builder tagged with the kind of product it produces.
#[derive(Debug, Clone)]
pub struct CatalogProductBuilder {
    kind: ProductKind,
    name: Option<String>,
    price: Decimal,
    metadata: BTreeMap<String, String>,
}

impl CatalogProductBuilder {
    pub fn new(kind: ProductKind) -> Self {
        Self {
            kind,
            name: None,
            price: Decimal::ZERO,
            metadata: BTreeMap::new(),
        }
    }

    pub fn physical() -> Self {
        Self::new(ProductKind::Physical)
    }

    pub fn digital() -> Self {
        Self::new(ProductKind::Digital)
    }

    pub const fn kind(&self) -> ProductKind {
        self.kind
    }
}

impl ProductBuilder for CatalogProductBuilder {
    fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    fn set_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    fn build(&mut self) -> CatalogProduct {
        let product = CatalogProduct {
            kind: self.kind,
            name: self.name.take(),
            price: self.price,
            metadata: std::mem::take(&mut self.metadata),
        };
        self.reset();
        product
    }
}
