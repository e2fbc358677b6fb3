//! Fetch CLI command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{Config, ProductRecord, StoreKind};
use crate::services::ProductAccessService;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// SKUs to fetch, in order (repeat a SKU to observe caching)
    #[arg(required = true)]
    pub skus: Vec<String>,

    /// Store to fetch from
    #[arg(short, long, value_enum, default_value_t = StoreKind::Physical, ignore_case = true)]
    pub store: StoreKind,

    /// Access token presented to the proxy
    #[arg(short, long, default_value = "", env = "STOREFRONT_TOKEN", hide_env_values = true)]
    pub token: String,
}

#[derive(Debug, serde::Serialize)]
pub struct FetchResult {
    pub sku: String,
    pub found: bool,
    pub product: Option<ProductRecord>,
}

#[derive(Debug, serde::Serialize)]
pub struct FetchOutput {
    pub store: StoreKind,
    pub results: Vec<FetchResult>,
    pub store_accesses: u64,
}

impl CommandOutput for FetchOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Store: {}\n", self.store)];
        lines.push(format!("{:<12} {:<24} {:>10}", "SKU", "NAME", "PRICE"));
        lines.push("-".repeat(48));

        for result in &self.results {
            match &result.product {
                Some(p) => lines.push(format!(
                    "{:<12} {:<24} {:>10}",
                    truncate(&p.sku, 12),
                    truncate(&p.name, 24),
                    p.price
                )),
                None => lines.push(format!("{:<12} {:<24}", truncate(&result.sku, 12), "(not found)")),
            }
        }

        lines.push(format!(
            "\n{} request(s), {} store access(es)",
            self.results.len(),
            self.store_accesses
        ));
        lines.join("\n")
    }
}

/// Fetch `skus` in order through the proxy for `store`.
///
/// Stops at the first error; an Unauthorized rejection surfaces as the root cause.
pub async fn fetch_all(
    service: &ProductAccessService,
    store: StoreKind,
    skus: Vec<String>,
    token: &str,
) -> Result<FetchOutput> {
    let mut results = Vec::with_capacity(skus.len());
    for sku in skus {
        let product = service
            .fetch(store, &sku, token)
            .await
            .with_context(|| format!("Failed to fetch {sku} from the {store} store"))?;
        results.push(FetchResult {
            found: product.is_some(),
            sku,
            product,
        });
    }

    Ok(FetchOutput {
        store,
        results,
        store_accesses: service.store_accesses(store),
    })
}

pub async fn execute(args: FetchArgs, config: &Config, json_mode: bool) -> Result<()> {
    let service = ProductAccessService::from_config(config);
    let out = fetch_all(&service, args.store, args.skus, &args.token).await?;
    output(&out, json_mode);
    Ok(())
}
