//! Product elements visited by pricing strategies.

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata key carrying a percentage discount, e.g. `"10"` for 10% off.
pub const DISCOUNT_PCT_KEY: &str = "discount_pct";

/// Tag that halves the price under tag-based rules.
pub const CLEARANCE_TAG: &str = "clearance";

/// Product as seen by pricing rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductElement {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ProductElement {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            tags: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Hand this element to a pricing strategy.
    pub fn accept<F, R>(&self, strategy: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        strategy(self)
    }
}

/// Pricing strategy selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PricingRule {
    /// Percentage discount from the `discount_pct` metadata key.
    #[default]
    #[value(alias = "discount")]
    Metadata,
    /// Clearance tag halves the price, then the metadata discount applies.
    #[value(alias = "tag")]
    Tags,
}

impl PricingRule {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_passes_element_to_strategy() {
        let element = ProductElement::new("SKU-001", "Camiseta Polo", Decimal::new(799, 1))
            .with_tag("clothing");

        let name_len = element.accept(|e| e.name.len());
        assert_eq!(name_len, "Camiseta Polo".len());
        assert!(element.has_tag("clothing"));
        assert!(!element.has_tag(CLEARANCE_TAG));
    }

    #[test]
    fn test_pricing_rule_parse() {
        assert_eq!(PricingRule::from_str("tags", true), Ok(PricingRule::Tags));
        assert_eq!(PricingRule::from_str("Metadata", true), Ok(PricingRule::Metadata));
        assert_eq!(PricingRule::from_str("discount", true), Ok(PricingRule::Metadata));
        assert!(PricingRule::from_str("bogus", true).is_err());
        assert_eq!(PricingRule::default(), PricingRule::Metadata);
    }
}
