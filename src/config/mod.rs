//! Configuration module for Sitemap-SEO
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_seo::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap-seo.toml")).unwrap();
//! println!("Scraping in batches of {}", config.scanner.batch_size);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, ScannerConfig, UserAgentConfig, DEFAULT_SITEMAP_PATHS,
    DEFAULT_USER_AGENTS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
