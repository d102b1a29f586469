//! Crawler module for fetching and scraping
//!
//! This module contains the fetch-and-extract side of a scan, including:
//! - HTTP fetching with rotating user agents
//! - Sitemap `<loc>` and page SEO field extraction
//! - Batched concurrent scraping
//! - Overall scan coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::{Coordinator, ScanOutcome};
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageFetcher};
pub use parser::{extract_locs, parse_page, PageMetadata};
pub use scheduler::{scrape, scrape_page, SeoRecord, DEFAULT_BATCH_SIZE};
