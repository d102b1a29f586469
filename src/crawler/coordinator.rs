//! Scan coordinator - end-to-end pipeline for one base URL
//!
//! This module ties the pipeline stages together:
//! - Discovering sitemaps for the base URL
//! - Resolving each sitemap into its page URLs
//! - Scraping those pages in batches
//! - Collecting run statistics

use crate::config::Config;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::scheduler::{scrape, SeoRecord};
use crate::output::ScanStatistics;
use crate::sitemap::{discover_sitemaps, SitemapResolver};
use crate::url::parse_base_url;
use crate::SeoError;
use url::Url;

/// Result of scanning one base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No candidate location yielded a sitemap
    NoSitemaps,

    /// Sitemaps were found and their pages scraped
    Completed {
        /// Sitemaps discovered for the base URL, in discovery order
        sitemaps: Vec<String>,
        /// Records for every page that fetched successfully
        records: Vec<SeoRecord>,
        /// Counters for the run
        statistics: ScanStatistics,
    },
}

impl ScanOutcome {
    /// Returns the scraped records, empty when no sitemap was found
    pub fn records(&self) -> &[SeoRecord] {
        match self {
            Self::NoSitemaps => &[],
            Self::Completed { records, .. } => records,
        }
    }
}

/// Main scan coordinator structure
pub struct Coordinator<F> {
    fetcher: F,
    base_url: Url,
    sitemap_paths: Vec<String>,
    batch_size: usize,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator backed by the HTTP fetcher
    ///
    /// # Arguments
    ///
    /// * `config` - The scanner configuration
    /// * `base_url` - The site to scan
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SeoError)` - Invalid base URL or HTTP client failure
    pub fn new(config: &Config, base_url: &str) -> Result<Self, SeoError> {
        let fetcher = HttpFetcher::from_config(&config.scanner, &config.user_agent)?;
        Self::with_fetcher(fetcher, config, base_url)
    }
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator using a caller-supplied fetcher
    pub fn with_fetcher(fetcher: F, config: &Config, base_url: &str) -> Result<Self, SeoError> {
        Ok(Self {
            fetcher,
            base_url: parse_base_url(base_url)?,
            sitemap_paths: config.scanner.sitemap_paths.clone(),
            batch_size: config.scanner.batch_size,
        })
    }

    /// The base URL being scanned
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs the full pipeline
    ///
    /// Every discovered sitemap is resolved and scraped independently, in
    /// discovery order; pages listed by several sitemaps are scraped once per
    /// sitemap. Per-URL failures only shrink the result.
    pub async fn run(&self) -> Result<ScanOutcome, SeoError> {
        tracing::info!("Searching for sitemaps under {}", self.base_url);

        let sitemaps =
            discover_sitemaps(&self.fetcher, &self.base_url, &self.sitemap_paths).await?;
        if sitemaps.is_empty() {
            tracing::info!("No sitemaps found.");
            return Ok(ScanOutcome::NoSitemaps);
        }

        let mut statistics = ScanStatistics {
            sitemaps_discovered: sitemaps.len(),
            ..ScanStatistics::default()
        };
        let mut records = Vec::new();
        let mut resolver = SitemapResolver::new(&self.fetcher);

        for sitemap in &sitemaps {
            tracing::info!("Scraping sitemap: {}", sitemap);

            let pages = resolver.resolve(sitemap).await;
            statistics.sitemaps_visited += resolver.visited_count();
            statistics.pages_resolved += pages.len();
            tracing::info!("Resolved {} page(s) from {}", pages.len(), sitemap);

            let scraped = scrape(&self.fetcher, &pages, self.batch_size).await;
            statistics.pages_scraped += scraped.len();
            statistics.pages_failed += pages.len() - scraped.len();
            records.extend(scraped);
        }

        Ok(ScanOutcome::Completed {
            sitemaps,
            records,
            statistics,
        })
    }
}
