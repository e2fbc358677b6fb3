//! Price CLI command.

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{PricingRule, ProductElement, DISCOUNT_PCT_KEY};
use crate::services::price_with;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Base price
    pub price: Decimal,

    /// Product name
    #[arg(short, long, default_value = "item")]
    pub name: String,

    /// Product SKU
    #[arg(short, long, default_value = "SKU-ADHOC")]
    pub sku: String,

    /// Tags (e.g. "clearance")
    #[arg(short, long)]
    pub tag: Vec<String>,

    /// Percentage discount
    #[arg(short, long)]
    pub discount: Option<String>,

    /// Pricing rule; applies every rule when omitted
    #[arg(short, long, value_enum, ignore_case = true)]
    pub rule: Option<PricingRule>,
}

#[derive(Debug, serde::Serialize)]
pub struct RulePrice {
    pub rule: PricingRule,
    pub price: Decimal,
}

#[derive(Debug, serde::Serialize)]
pub struct PriceOutput {
    pub element: ProductElement,
    pub prices: Vec<RulePrice>,
}

impl CommandOutput for PriceOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{} ({}) base price {}",
            self.element.name, self.element.sku, self.element.price
        )];
        for p in &self.prices {
            lines.push(format!("  {:<10} {}", p.rule, p.price));
        }
        lines.join("\n")
    }
}

/// Price an ad-hoc element under the selected rule, or every rule.
pub fn price_element(args: PriceArgs) -> Result<PriceOutput> {
    let rules = match args.rule {
        Some(rule) => vec![rule],
        None => vec![PricingRule::Metadata, PricingRule::Tags],
    };

    let mut element = ProductElement::new(args.sku, args.name, args.price);
    for tag in args.tag {
        element = element.with_tag(tag);
    }
    if let Some(discount) = args.discount {
        element = element.with_metadata(DISCOUNT_PCT_KEY, discount);
    }

    let prices = rules
        .into_iter()
        .map(|rule| {
            price_with(rule, &element)
                .map(|price| RulePrice { rule, price })
                .with_context(|| format!("Failed to apply {rule} pricing"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PriceOutput { element, prices })
}

pub fn execute(args: PriceArgs, json_mode: bool) -> Result<()> {
    let out = price_element(args)?;
    output(&out, json_mode);
    Ok(())
}
