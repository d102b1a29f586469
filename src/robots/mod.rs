//! Robots.txt handling module
//!
//! robots.txt is only consulted as a sitemap directory here: the `Sitemap:`
//! directives it lists are fed into sitemap discovery. Allow/Disallow rules
//! and crawl delays are not interpreted.

mod parser;

pub use parser::ParsedRobots;

use url::Url;

/// Extracts the sitemap URLs listed in a robots.txt body
///
/// # Arguments
///
/// * `content` - The raw robots.txt file content
/// * `base_url` - The site's base URL, used to resolve relative directives
///
/// # Returns
///
/// Absolute sitemap URLs in file order
pub fn sitemap_directives(content: &str, base_url: &Url) -> Vec<String> {
    ParsedRobots::from_content(content).sitemaps(base_url)
}
