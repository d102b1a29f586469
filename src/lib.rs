//! Sitemap-SEO: a sitemap-driven SEO scanner
//!
//! This crate discovers a site's sitemaps, flattens nested sitemap indexes
//! into a list of page URLs and scrapes each page for its title, first H1,
//! meta description and HTTP status.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for Sitemap-SEO operations
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::{scrape, Coordinator, HttpFetcher, PageFetcher, ScanOutcome, SeoRecord};
pub use sitemap::{discover_sitemaps, SitemapResolver};
