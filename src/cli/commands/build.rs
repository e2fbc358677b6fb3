//! Build CLI command.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{CatalogProduct, ProductKind};
use crate::domain::ports::ProductBuilder;
use crate::services::CatalogProductBuilder;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Product kind
    #[arg(value_enum, ignore_case = true)]
    pub kind: ProductKind,

    /// Product name
    #[arg(short, long)]
    pub name: String,

    /// Product price
    #[arg(short, long)]
    pub price: Decimal,

    /// Metadata entries (format: "key=value")
    #[arg(short, long)]
    pub meta: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct BuildOutput {
    pub info: String,
    pub product: CatalogProduct,
}

impl CommandOutput for BuildOutput {
    fn to_human(&self) -> String {
        self.info.clone()
    }
}

/// Split a `key=value` pair.
pub fn parse_meta(entry: &str) -> Result<(&str, &str)> {
    entry
        .split_once('=')
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Invalid metadata entry '{entry}': expected key=value"))
}

pub fn execute(args: BuildArgs, json_mode: bool) -> Result<()> {
    let mut builder = CatalogProductBuilder::new(args.kind);
    builder.set_name(&args.name);
    builder.set_price(args.price);
    for entry in &args.meta {
        let (key, value) = parse_meta(entry)?;
        builder.set_metadata(key, value);
    }
    let product = builder.build();

    let out = BuildOutput {
        info: product.product_info(),
        product,
    };
    output(&out, json_mode);
    Ok(())
}
