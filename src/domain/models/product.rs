//! Product records served by the stores and proxies.

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable product record keyed by SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
}

impl ProductRecord {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.sku, self.name, self.price)
    }
}

/// Which backing store a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Store A: physical goods, served without authorization.
    #[value(alias = "a")]
    Physical,
    /// Store B: digital goods, served behind a token.
    #[value(alias = "b")]
    Digital,
}

impl StoreKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }

    /// Label used in logs for the store backing this kind.
    pub const fn store_label(&self) -> &'static str {
        match self {
            Self::Physical => "store-a",
            Self::Digital => "store-b",
        }
    }

    /// Label used in logs and errors for the proxy fronting this kind.
    pub const fn proxy_label(&self) -> &'static str {
        match self {
            Self::Physical => "physical-proxy",
            Self::Digital => "digital-proxy",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
