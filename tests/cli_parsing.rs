use clap::Parser;
use rust_decimal::Decimal;
use storefront::cli::commands::demo::DemoSection;
use storefront::cli::{Cli, Commands};
use storefront::domain::models::{PricingRule, ProductKind, StoreKind};

#[test]
fn test_parse_fetch_defaults() {
    let cli = Cli::try_parse_from(["storefront", "fetch", "SKU-001", "SKU-001"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Fetch(args) => {
            assert_eq!(args.skus, vec!["SKU-001", "SKU-001"]);
            assert_eq!(args.store, StoreKind::Physical);
            assert_eq!(args.token, "");
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_fetch_with_token() {
    let cli = Cli::try_parse_from([
        "storefront",
        "--json",
        "fetch",
        "SKU-003",
        "--store",
        "digital",
        "--token",
        "valid-token",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Fetch(args) => {
            assert_eq!(args.store, StoreKind::Digital);
            assert_eq!(args.token, "valid-token");
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_store_alias_and_case() {
    let cli = Cli::try_parse_from(["storefront", "fetch", "SKU-003", "--store", "B"]).unwrap();
    match cli.command {
        Commands::Fetch(args) => assert_eq!(args.store, StoreKind::Digital),
        other => panic!("Wrong command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["storefront", "catalog", "Digital"]).unwrap();
    match cli.command {
        Commands::Catalog(args) => assert_eq!(args.store, Some(StoreKind::Digital)),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_choices() {
    assert!(Cli::try_parse_from(["storefront", "fetch", "SKU-001", "--store", "warehouse"]).is_err());
    assert!(Cli::try_parse_from(["storefront", "catalog", "warehouse"]).is_err());
    assert!(Cli::try_parse_from([
        "storefront", "build", "service", "--name", "Consultoria", "--price", "10"
    ])
    .is_err());
    assert!(Cli::try_parse_from(["storefront", "price", "10", "--rule", "bogus"]).is_err());
}

#[test]
fn test_parse_fetch_requires_sku() {
    assert!(Cli::try_parse_from(["storefront", "fetch"]).is_err());
}

#[test]
fn test_parse_build() {
    let cli = Cli::try_parse_from([
        "storefront",
        "build",
        "physical",
        "--name",
        "Camiseta Polo",
        "--price",
        "79.9",
        "--meta",
        "color=azul",
    ])
    .unwrap();

    match cli.command {
        Commands::Build(args) => {
            assert_eq!(args.kind, ProductKind::Physical);
            assert_eq!(args.name, "Camiseta Polo");
            assert_eq!(args.price, Decimal::new(799, 1));
            assert_eq!(args.meta, vec!["color=azul"]);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_build_rejects_bad_price() {
    assert!(Cli::try_parse_from([
        "storefront", "build", "digital", "--name", "Ebook", "--price", "cheap"
    ])
    .is_err());
}

#[test]
fn test_parse_price() {
    let cli = Cli::try_parse_from([
        "storefront",
        "price",
        "129.9",
        "--tag",
        "clearance",
        "--discount",
        "10",
        "--rule",
        "tags",
    ])
    .unwrap();

    match cli.command {
        Commands::Price(args) => {
            assert_eq!(args.price, Decimal::new(1299, 1));
            assert_eq!(args.tag, vec!["clearance"]);
            assert_eq!(args.discount.as_deref(), Some("10"));
            assert_eq!(args.rule, Some(PricingRule::Tags));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_demo_sections() {
    let cli = Cli::try_parse_from(["storefront", "demo"]).unwrap();
    match cli.command {
        Commands::Demo(args) => assert_eq!(args.section, DemoSection::All),
        other => panic!("Wrong command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["storefront", "demo", "proxy"]).unwrap();
    match cli.command {
        Commands::Demo(args) => assert_eq!(args.section, DemoSection::Proxy),
        other => panic!("Wrong command: {other:?}"),
    }

    assert!(Cli::try_parse_from(["storefront", "demo", "factory"]).is_err());
}

#[test]
fn test_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["storefront", "catalog", "--config", "custom.yaml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.yaml")));
    match cli.command {
        Commands::Catalog(args) => assert!(args.store.is_none()),
        other => panic!("Wrong command: {other:?}"),
    }
}
