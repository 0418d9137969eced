//! FitGround main entry point
//!
//! Command-line interface for the FitGround product discovery and
//! site-footprint extraction pipeline.

use clap::Parser;
use fitground::config::{load_config, Config};
use fitground::crawler::{build_http_client, discover_products};
use fitground::extract::{scrape_product, ProductRow};
use fitground::output::{write_discovered_urls, write_snapshots};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// FitGround: camping-gear product discovery and site-footprint extraction
///
/// FitGround crawls configured brand websites for product pages, extracts
/// tent and shelter dimensions, normalizes them to meters, and writes CSV
/// snapshots of the derived site-footprint requirements.
#[derive(Parser, Debug)]
#[command(name = "fitground")]
#[command(version = "1.0.0")]
#[command(about = "Camping-gear product discovery and size extraction", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with = "discover_only")]
    dry_run: bool,

    /// Discover and write product URL artifacts, skip page extraction
    #[arg(long)]
    discover_only: bool,

    /// Process only the brand with this key
    #[arg(long, value_name = "KEY")]
    brand: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(key) = &cli.brand {
        if !config.brands.iter().any(|b| &b.key == key) {
            tracing::error!("No brand with key '{}' in configuration", key);
            return Err(format!("unknown brand key '{}'", key).into());
        }
    }

    if cli.dry_run {
        handle_dry_run(&config, cli.brand.as_deref());
    } else {
        handle_run(&config, cli.brand.as_deref(), cli.discover_only).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fitground=info,warn"),
            1 => EnvFilter::new("fitground=debug,info"),
            2 => EnvFilter::new("fitground=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config, only_brand: Option<&str>) {
    println!("=== FitGround Dry Run ===\n");

    println!("Fetch:");
    println!("  Timeout: {}s", config.fetch.request_timeout_secs);
    println!("  Request gap: {}ms", config.fetch.request_gap_ms);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput directory: {}", config.output.output_dir);

    let brands: Vec<_> = config
        .brands
        .iter()
        .filter(|b| only_brand.map_or(true, |key| b.key == key))
        .collect();

    println!("\nBrands ({}):", brands.len());
    for brand in &brands {
        if brand.base_url.is_empty() {
            println!("  - {} (no base URL, will be skipped)", brand.key);
            continue;
        }
        println!(
            "  - {} [{}] {} (max {} pages, depth {})",
            brand.key,
            brand.category,
            brand.base_url,
            brand.limits.max_pages,
            brand.limits.max_depth
        );
        if !brand.sitemap_url.is_empty() {
            println!("    sitemap: {}", brand.sitemap_url);
        }
        if !brand.allow_paths.is_empty() {
            println!("    allow paths: {}", brand.allow_paths.join(", "));
        }
        println!("    pattern: {}", brand.product_link_pattern);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main pipeline: discovery, extraction, snapshot output
///
/// Brands are processed strictly one after another. A failure while
/// processing one brand is logged and never prevents the remaining
/// brands; the final snapshots reflect whatever succeeded.
async fn handle_run(
    config: &Config,
    only_brand: Option<&str>,
    discover_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_http_client(&config.fetch, &config.user_agent)?;
    let output_dir = Path::new(&config.output.output_dir);

    let mut all_rows: Vec<ProductRow> = Vec::new();

    for brand in &config.brands {
        if let Some(key) = only_brand {
            if brand.key != key {
                continue;
            }
        }

        tracing::info!("Processing brand '{}'", brand.key);
        let products = discover_products(&client, brand, &config.fetch).await;

        if let Err(e) = write_discovered_urls(output_dir, &brand.key, &products) {
            tracing::error!("Failed to write URL artifact for '{}': {}", brand.key, e);
        }

        if discover_only {
            continue;
        }

        for url in &products {
            match scrape_product(&client, url, brand).await {
                Ok(row) => {
                    if row.is_meaningful() {
                        all_rows.push(row);
                    }
                }
                Err(failure) => {
                    tracing::warn!("{} fail: {} :: {}", brand.key, url, failure);
                }
            }
        }
    }

    if discover_only {
        tracing::info!("Discovery finished, skipping extraction and snapshots");
        return Ok(());
    }

    let deduped = dedup_rows(all_rows);
    let (snapshot, latest) = write_snapshots(output_dir, &deduped, chrono::Utc::now())?;
    println!("Saved snapshot: {}", snapshot.display());
    println!("Updated latest: {}", latest.display());

    Ok(())
}

/// Drops later rows that repeat an earlier row's (brand, names) key
fn dedup_rows(rows: Vec<ProductRow>) -> Vec<ProductRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.dedup_key()))
        .collect()
}
