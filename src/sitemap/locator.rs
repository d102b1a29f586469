//! Sitemap discovery for a base URL
//!
//! Checks a fixed list of well-known sitemap locations. robots.txt is one of
//! them; when it answers, its `Sitemap:` directives are used instead of the
//! robots.txt URL itself.

use crate::crawler::PageFetcher;
use crate::robots::sitemap_directives;
use crate::url::{is_robots_txt, resolve_reference};
use crate::UrlError;
use url::Url;

/// Resolves the well-known sitemap paths against the base URL
///
/// # Arguments
///
/// * `base_url` - The site's base URL
/// * `paths` - Relative paths, e.g. `/sitemap.xml`, fetched in this order
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - Absolute candidate URLs in the same order as `paths`
/// * `Err(UrlError)` - A path could not be joined onto the base URL
///
/// # Example
///
/// ```
/// use sitemap_seo::sitemap::candidate_urls;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/blog?x=1").unwrap();
/// let candidates = candidate_urls(&base, &["/sitemap.xml".to_string()]).unwrap();
/// assert_eq!(candidates[0].as_str(), "https://example.com/sitemap.xml");
/// ```
pub fn candidate_urls(base_url: &Url, paths: &[String]) -> Result<Vec<Url>, UrlError> {
    paths
        .iter()
        .map(|path| resolve_reference(base_url, path))
        .collect()
}

/// Discovers the sitemaps published by a site
///
/// Each candidate is fetched in order. Candidates answering with HTTP 200 are
/// kept; a robots.txt candidate contributes its `Sitemap:` directives (in file
/// order) rather than its own URL. An empty result means the site publishes
/// no discoverable sitemap, which is not an error.
pub async fn discover_sitemaps<F: PageFetcher>(
    fetcher: &F,
    base_url: &Url,
    paths: &[String],
) -> Result<Vec<String>, UrlError> {
    let mut sitemaps = Vec::new();

    for candidate in candidate_urls(base_url, paths)? {
        let Some(response) = fetcher.fetch(candidate.as_str()).await else {
            tracing::debug!("No sitemap found at {}", candidate);
            continue;
        };

        if response.status_code != 200 {
            tracing::debug!("Skipping {} (HTTP {})", candidate, response.status_code);
            continue;
        }

        if is_robots_txt(&candidate) {
            let listed = sitemap_directives(&response.body, base_url);
            tracing::info!("robots.txt lists {} sitemap(s)", listed.len());
            sitemaps.extend(listed);
        } else {
            tracing::info!("Found sitemap at {}", candidate);
            sitemaps.push(candidate.to_string());
        }
    }

    Ok(sitemaps)
}
