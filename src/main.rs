//! Storefront CLI entry point.

use anyhow::Result;
use clap::Parser;

use storefront::cli::{Cli, Commands};
use storefront::domain::models::Config;
use storefront::infrastructure::config::ConfigLoader;
use storefront::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => storefront::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => storefront::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Fetch(args) => {
            storefront::cli::commands::fetch::execute(args, &config, cli.json).await
        }
        Commands::Catalog(args) => storefront::cli::commands::catalog::execute(args, cli.json),
        Commands::Build(args) => storefront::cli::commands::build::execute(args, cli.json),
        Commands::Price(args) => storefront::cli::commands::price::execute(args, cli.json),
        Commands::Demo(args) => {
            storefront::cli::commands::demo::execute(args, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        storefront::cli::handle_error(err, cli.json);
    }
}
