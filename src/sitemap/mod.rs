//! Sitemap discovery and resolution
//!
//! - `locator` checks well-known sitemap paths and robots.txt for a base URL
//! - `resolver` flattens a sitemap (and any nested sitemap indexes) into page URLs

mod locator;
mod resolver;

pub use locator::{candidate_urls, discover_sitemaps};
pub use resolver::{is_sitemap_reference, partition_locs, SitemapResolver};
