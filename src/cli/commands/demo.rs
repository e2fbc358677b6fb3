//! Demo CLI command: replays the virtual store walkthroughs.

use anyhow::Result;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::DomainResult;
use crate::domain::models::{
    Config, PricingRule, ProductElement, ProductKind, ProductRecord, StoreKind, CLEARANCE_TAG,
    DISCOUNT_PCT_KEY,
};
use crate::domain::ports::{Catalog, ProductBuilder};
use crate::services::{
    digital_catalog, physical_catalog, price_with, CatalogProductBuilder, ProductAccessService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoSection {
    Singleton,
    Builder,
    Proxy,
    Visitor,
    All,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Walkthrough to run
    #[arg(value_enum, default_value = "all")]
    pub section: DemoSection,
}

#[derive(Debug, serde::Serialize)]
pub struct DemoBlock {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct DemoOutput {
    pub sections: Vec<DemoBlock>,
}

impl CommandOutput for DemoOutput {
    fn to_human(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("=== {} ===\n\n{}", s.title, s.lines.join("\n")))
            .collect::<Vec<_>>()
            .join("\n\n\n")
    }
}

/// Show that repeated catalog access yields the same instance.
pub fn singleton_walkthrough() -> DemoBlock {
    let mut lines = Vec::new();
    for (label, a, b) in [
        ("physical", physical_catalog(), physical_catalog()),
        ("digital", digital_catalog(), digital_catalog()),
    ] {
        lines.push(format!("Testing singleton behavior with the {label} catalog:"));
        lines.push(a.connection_info());
        lines.push(format!("Same instance? {}", std::ptr::eq(a, b)));
    }
    DemoBlock {
        title: "Singleton".to_string(),
        lines,
    }
}

/// Build one physical and one digital product.
pub fn builder_walkthrough() -> DemoBlock {
    let mut lines = Vec::new();

    let drafts = [
        (ProductKind::Physical, "Camiseta Polo", Decimal::new(799, 1), ("color", "azul")),
        (ProductKind::Digital, "Curso Python", Decimal::new(1999, 1), ("duration", "10h")),
    ];
    for (kind, name, price, (key, value)) in drafts {
        let mut builder = CatalogProductBuilder::new(kind);
        builder.set_name(name);
        builder.set_price(price);
        builder.set_metadata(key, value);
        lines.push(format!("Testing builder ({}):", kind.as_str()));
        lines.push(builder.build().product_info());
    }

    DemoBlock {
        title: "Builder".to_string(),
        lines,
    }
}

/// Fetch through the open and the token-gated proxies.
pub async fn proxy_walkthrough(config: &Config) -> DemoBlock {
    let service = ProductAccessService::from_config(config);
    let mut lines = vec!["Testing the open proxy over store A:".to_string()];

    for _ in 0..2 {
        lines.push(describe(service.fetch(StoreKind::Physical, "SKU-001", "").await));
    }
    lines.push(format!(
        "store A accesses: {}",
        service.store_accesses(StoreKind::Physical)
    ));

    lines.push("Testing the token-gated proxy over store B:".to_string());
    let token = config.proxy.access_token.as_str();
    lines.push(describe(service.fetch(StoreKind::Digital, "SKU-003", token).await));
    lines.push(describe(service.fetch(StoreKind::Digital, "SKU-004", "bad-token").await));
    lines.push(format!(
        "store B accesses: {}",
        service.store_accesses(StoreKind::Digital)
    ));

    DemoBlock {
        title: "Proxy".to_string(),
        lines,
    }
}

/// Price two sample elements under both rules.
pub fn visitor_walkthrough() -> DemoBlock {
    let elements = [
        ProductElement::new("SKU-001", "Camiseta Polo", Decimal::new(799, 1)).with_tag("clothing"),
        ProductElement::new("SKU-004", "Relógio Promo", Decimal::new(1299, 1))
            .with_tag(CLEARANCE_TAG)
            .with_metadata(DISCOUNT_PCT_KEY, "10"),
    ];

    let mut lines = Vec::new();
    for rule in [PricingRule::Metadata, PricingRule::Tags] {
        lines.push(format!("Using the {rule} pricing rule:"));
        for element in &elements {
            let price = price_with(rule, element)
                .map_or_else(|e| e.to_string(), |p| format!("R$ {p}"));
            lines.push(format!("{}: {price}", element.name));
        }
    }

    DemoBlock {
        title: "Visitor".to_string(),
        lines,
    }
}

fn describe(result: DomainResult<Option<ProductRecord>>) -> String {
    match result {
        Ok(Some(record)) => record.to_string(),
        Ok(None) => "(not found)".to_string(),
        Err(err) => format!("rejected: {err}"),
    }
}

pub async fn run(section: DemoSection, config: &Config) -> DemoOutput {
    let mut sections = Vec::new();
    let all = section == DemoSection::All;

    if all || section == DemoSection::Singleton {
        sections.push(singleton_walkthrough());
    }
    if all || section == DemoSection::Builder {
        sections.push(builder_walkthrough());
    }
    if all || section == DemoSection::Proxy {
        sections.push(proxy_walkthrough(config).await);
    }
    if all || section == DemoSection::Visitor {
        sections.push(visitor_walkthrough());
    }

    DemoOutput { sections }
}

pub async fn execute(args: DemoArgs, config: &Config, json_mode: bool) -> Result<()> {
    let out = run(args.section, config).await;
    output(&out, json_mode);
    Ok(())
}
