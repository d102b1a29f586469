//! Sitemap index resolution
//!
//! Walks a sitemap and every sitemap it references, collecting the page URLs
//! they list. The walk is depth-first: a sitemap's own pages are collected
//! before any of its nested sitemaps are visited, and nested sitemaps are
//! visited one at a time in document order.

use crate::crawler::{extract_locs, PageFetcher};
use std::collections::HashSet;

/// Returns true if a `<loc>` value refers to another sitemap
///
/// Any value containing `xml` counts, so a page whose URL merely contains
/// `xml` is fetched as a sitemap and contributes nothing.
pub fn is_sitemap_reference(loc: &str) -> bool {
    loc.contains("xml")
}

/// Splits `<loc>` values into nested sitemaps and pages, keeping order
///
/// # Returns
///
/// `(sitemaps, pages)`
pub fn partition_locs(locs: Vec<String>) -> (Vec<String>, Vec<String>) {
    locs.into_iter().partition(|loc| is_sitemap_reference(loc))
}

/// Flattens sitemaps into page URLs
///
/// Holds the visited set for one resolution. [`SitemapResolver::resolve`]
/// starts each call from an empty set, so a resolver can be reused across
/// sitemaps without one run suppressing the next.
pub struct SitemapResolver<'a, F> {
    fetcher: &'a F,
    visited: HashSet<String>,
}

impl<'a, F: PageFetcher> SitemapResolver<'a, F> {
    /// Creates a resolver fetching through `fetcher`
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            visited: HashSet::new(),
        }
    }

    /// Resolves a sitemap into the page URLs it lists, directly or through
    /// nested sitemap indexes
    ///
    /// Each distinct URL is fetched at most once per call, which also makes
    /// cyclic sitemap graphs terminate. Sitemaps that fail to fetch are
    /// skipped. Pages listed by more than one sitemap appear once per listing.
    pub async fn resolve(&mut self, start_url: &str) -> Vec<String> {
        self.visited.clear();

        let mut pages = Vec::new();
        // LIFO worklist; children are pushed in reverse so they pop in
        // document order, matching a recursive walk.
        let mut pending = vec![start_url.to_string()];

        while let Some(url) = pending.pop() {
            if !self.visited.insert(url.clone()) {
                tracing::trace!("Already visited {}", url);
                continue;
            }

            let Some(response) = self.fetcher.fetch(&url).await else {
                tracing::debug!("Could not fetch sitemap {}", url);
                continue;
            };

            let (sitemaps, page_urls) = partition_locs(extract_locs(&response.body));
            tracing::debug!(
                "{}: {} page(s), {} nested sitemap(s)",
                url,
                page_urls.len(),
                sitemaps.len()
            );

            pages.extend(page_urls);
            for sitemap in sitemaps.into_iter().rev() {
                tracing::info!("Found sitemap {}", sitemap);
                pending.push(sitemap);
            }
        }

        pages
    }

    /// Number of URLs visited by the most recent [`resolve`](Self::resolve)
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
