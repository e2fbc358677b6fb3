//! Catalog variants and builder-produced catalog products.

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Variant of an in-memory catalog singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogVariant {
    PhysicalCatalogV1,
    DigitalCatalogV2,
}

impl CatalogVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhysicalCatalogV1 => "PhysicalCatalogV1",
            Self::DigitalCatalogV2 => "DigitalCatalogV2",
        }
    }

    /// Catalog generation shown in connection info.
    pub const fn generation(&self) -> u8 {
        match self {
            Self::PhysicalCatalogV1 => 1,
            Self::DigitalCatalogV2 => 2,
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of product a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Physical,
    Digital,
}

impl ProductKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }

    const fn display_name(self) -> &'static str {
        match self {
            Self::Physical => "PhysicalProduct",
            Self::Digital => "DigitalProduct",
        }
    }
}

/// Product assembled by a [`ProductBuilder`](crate::domain::ports::ProductBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub kind: ProductKind,
    pub name: Option<String>,
    pub price: Decimal,
    pub metadata: BTreeMap<String, String>,
}

impl CatalogProduct {
    /// One-line description of the product and its parts.
    pub fn product_info(&self) -> String {
        let meta = self
            .metadata
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} (type={}, name={}, price={}, meta={{{meta}}})",
            self.kind.display_name(),
            self.kind.as_str(),
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.price,
        )
    }
}
