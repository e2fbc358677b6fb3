//! Catalog CLI command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ProductRecord, StoreKind};
use crate::domain::ports::Catalog;
use crate::services::catalog_for;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog to show; shows both when omitted
    #[arg(value_enum, ignore_case = true)]
    pub store: Option<StoreKind>,
}

#[derive(Debug, serde::Serialize)]
pub struct CatalogOutput {
    pub variant: String,
    pub connection_info: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, serde::Serialize)]
pub struct CatalogListOutput {
    pub catalogs: Vec<CatalogOutput>,
}

impl CatalogOutput {
    fn from_catalog(catalog: &dyn Catalog) -> Self {
        Self {
            variant: catalog.variant().to_string(),
            connection_info: catalog.connection_info(),
            products: catalog.products().to_vec(),
        }
    }
}

impl CommandOutput for CatalogListOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        for catalog in &self.catalogs {
            lines.push(catalog.connection_info.clone());
            for p in &catalog.products {
                lines.push(format!("  - {p}"));
            }
        }
        lines.join("\n")
    }
}

pub fn execute(args: CatalogArgs, json_mode: bool) -> Result<()> {
    let kinds = match args.store {
        Some(kind) => vec![kind],
        None => vec![StoreKind::Physical, StoreKind::Digital],
    };

    let out = CatalogListOutput {
        catalogs: kinds
            .into_iter()
            .map(|kind| CatalogOutput::from_catalog(catalog_for(kind)))
            .collect(),
    };
    output(&out, json_mode);
    Ok(())
}
