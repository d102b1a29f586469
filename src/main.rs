//! Sitemap-SEO main entry point
//!
//! This is the command-line interface for the Sitemap-SEO scanner.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use sitemap_seo::config::{load_config_with_hash, validate, Config};
use sitemap_seo::crawler::{Coordinator, ScanOutcome};
use sitemap_seo::output::{log_statistics, write_json};
use tracing_subscriber::EnvFilter;

/// Sitemap-SEO: a sitemap-driven SEO scanner
///
/// Discovers a site's sitemaps, resolves nested sitemap indexes into page
/// URLs and records each page's title, H1, meta description and HTTP status
/// as JSON.
#[derive(Parser, Debug)]
#[command(name = "sitemap-seo")]
#[command(version = "1.0.0")]
#[command(about = "A sitemap-driven SEO scanner", long_about = None)]
struct Cli {
    /// Base URL of the site to scan
    #[arg(value_name = "BASE_URL", default_value = "https://example.com")]
    base_url: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write results to this file instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of pages fetched concurrently per batch
    #[arg(short, long, value_name = "N")]
    batch_size: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;
    let coordinator = Coordinator::new(&config, &cli.base_url)
        .with_context(|| format!("Cannot scan {}", cli.base_url))?;

    match coordinator.run().await? {
        ScanOutcome::NoSitemaps => {
            tracing::info!("Nothing to write");
        }
        ScanOutcome::Completed {
            records,
            statistics,
            ..
        } => {
            let output_path = Path::new(&config.output.json_path);
            write_json(&records, output_path)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;

            log_statistics(&statistics);
            tracing::info!("Done. Results written to {}", output_path.display());
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_seo=info,warn"),
            1 => EnvFilter::new("sitemap_seo=debug,info"),
            2 => EnvFilter::new("sitemap_seo=trace,debug"),
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

/// Loads the config file if given, then applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(batch_size) = cli.batch_size {
        config.scanner.batch_size = batch_size;
    }
    if let Some(output) = &cli.output {
        config.output.json_path = output.display().to_string();
    }

    validate(&config).context("Invalid command-line override")?;
    Ok(config)
}
