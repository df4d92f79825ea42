//! Fixprice-Scraper main entry point
//!
//! This is the command-line interface for the catalog crawler.

use clap::Parser;
use fixprice_scraper::config::load_config;
use fixprice_scraper::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fixprice-Scraper: catalog crawler and product extractor
///
/// Crawls the configured category listings, follows product links up to the
/// pagination bound, and writes normalized product records as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "fixprice-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Catalog crawler and product extractor", long_about = None)]
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
    #[arg(long)]
    dry_run: bool,
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

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!(
        "Starting crawl: {} seed URLs, region {}",
        config.site.seeds.len(),
        config.site.region_id
    );

    match crawl(config).await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fixprice_scraper=info,warn"),
            1 => EnvFilter::new("fixprice_scraper=debug,info"),
            2 => EnvFilter::new("fixprice_scraper=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &fixprice_scraper::config::Config) {
    println!("=== Fixprice-Scraper Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Page bound: {} pages per category", config.crawler.max_pages);
    println!("  Dispatch delay: {}ms", config.crawler.dispatch_delay_ms);
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );

    println!("\nSite:");
    println!("  Region: {}", config.site.region_id);

    println!("\nOutput:");
    println!("  Records: {}", config.output.records_path);

    println!("\nSeed Categories ({}):", config.site.seeds.len());
    for seed in &config.site.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start crawling with {} seed URLs",
        config.site.seeds.len()
    );
}
