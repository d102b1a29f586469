//! Output module for persisting scan results
//!
//! This module handles:
//! - Writing scraped records as a pretty-printed JSON array
//! - Recording scan statistics

pub mod stats;

pub use stats::{log_statistics, ScanStatistics};

use crate::crawler::SeoRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes records to `path` as a pretty-printed JSON array
///
/// Missing parent directories are created. An existing file is replaced.
///
/// # Example
///
/// ```no_run
/// use sitemap_seo::output::write_json;
/// use std::path::Path;
///
/// write_json(&[], Path::new("output.json")).unwrap();
/// ```
pub fn write_json(records: &[SeoRecord], path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
