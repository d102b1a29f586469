//! Batched scraping of page URLs
//!
//! Pages are scraped in contiguous batches. Every page in a batch is fetched
//! concurrently; the next batch starts only once the whole batch has
//! finished. The batch size is therefore the hard limit on in-flight fetches.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::parse_page;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

/// Default number of pages fetched concurrently per batch
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// SEO fields scraped from one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoRecord {
    /// The page URL as listed in the sitemap
    pub url: String,

    /// Text of the first `<title>` element
    pub title: String,

    /// Text of the first `<h1>` element
    pub h1: String,

    /// `content` of `<meta name="description">`
    pub meta_description: String,

    /// HTTP status code of the response
    pub status_code: u16,
}

/// Fetches one page and extracts its SEO record
///
/// Returns `None` when the fetch fails; extraction itself never fails.
pub async fn scrape_page<F: PageFetcher>(fetcher: &F, url: &str) -> Option<SeoRecord> {
    let page = fetcher.fetch(url).await?;
    let metadata = parse_page(&page.body);

    Some(SeoRecord {
        url: url.to_string(),
        title: metadata.title,
        h1: metadata.h1,
        meta_description: metadata.meta_description,
        status_code: page.status_code,
    })
}

/// Scrapes page URLs in sequential batches of concurrent fetches
///
/// # Arguments
///
/// * `fetcher` - Source of page responses
/// * `urls` - Page URLs in the order they should appear in the output
/// * `batch_size` - Maximum concurrent fetches; zero is treated as one
///
/// # Returns
///
/// One record per successfully fetched page, in input order. Failed pages are
/// skipped without affecting the rest of their batch or later batches.
pub async fn scrape<F: PageFetcher>(
    fetcher: &F,
    urls: &[String],
    batch_size: usize,
) -> Vec<SeoRecord> {
    let batch_size = batch_size.max(1);
    let total_batches = urls.len().div_ceil(batch_size);
    let mut results = Vec::with_capacity(urls.len());

    for (index, batch) in urls.chunks(batch_size).enumerate() {
        tracing::debug!(
            "Scraping batch {}/{} ({} pages)",
            index + 1,
            total_batches,
            batch.len()
        );

        let batch_results = join_all(batch.iter().map(|url| scrape_page(fetcher, url))).await;
        let before = results.len();
        results.extend(batch_results.into_iter().flatten());

        let failed = batch.len() - (results.len() - before);
        if failed > 0 {
            tracing::debug!("Batch {} dropped {} failed pages", index + 1, failed);
        }
    }

    results
}
