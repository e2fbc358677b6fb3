//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::build::BuildArgs;
use super::commands::catalog::CatalogArgs;
use super::commands::demo::DemoArgs;
use super::commands::fetch::FetchArgs;
use super::commands::price::PriceArgs;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Storefront - virtual store product access", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .storefront/config.yaml)
    #[arg(short, long, global = true, env = "STOREFRONT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch products by SKU through the store's access proxy
    Fetch(FetchArgs),

    /// Show catalog singletons and their seed products
    Catalog(CatalogArgs),

    /// Assemble a catalog product with the product builder
    Build(BuildArgs),

    /// Price a product element with the pricing rules
    Price(PriceArgs),

    /// Replay the virtual store walkthroughs
    Demo(DemoArgs),
}
