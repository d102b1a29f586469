//! Robots.txt parser implementation
//!
//! Scans robots.txt content for `Sitemap:` directives.

use crate::url::resolve_reference;
use url::Url;

/// Directive prefix, matched case-insensitively
const SITEMAP_DIRECTIVE: &str = "sitemap:";

/// Parsed robots.txt data
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw sitemap references in file order, not yet resolved
    sitemap_refs: Vec<String>,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    ///
    /// Every line that starts with `sitemap:` (any case, at the very start of
    /// the line) contributes the rest of the line, trimmed. An empty value
    /// is kept and later resolves to the base URL itself.
    pub fn from_content(content: &str) -> Self {
        let sitemap_refs = content
            .lines()
            .filter_map(|line| {
                let prefix = line.get(..SITEMAP_DIRECTIVE.len())?;
                if !prefix.eq_ignore_ascii_case(SITEMAP_DIRECTIVE) {
                    return None;
                }
                Some(line[SITEMAP_DIRECTIVE.len()..].trim().to_string())
            })
            .collect();

        Self { sitemap_refs }
    }

    /// Returns the raw sitemap references as written in the file
    pub fn sitemap_refs(&self) -> &[String] {
        &self.sitemap_refs
    }

    /// Returns the sitemap references resolved against the base URL
    ///
    /// Absolute references are kept as written; relative ones are joined
    /// onto `base_url`. References that cannot be resolved are dropped.
    pub fn sitemaps(&self, base_url: &Url) -> Vec<String> {
        self.sitemap_refs
            .iter()
            .filter_map(|reference| match resolve_reference(base_url, reference) {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    tracing::warn!("Ignoring unusable Sitemap directive '{}': {}", reference, e);
                    None
                }
            })
            .collect()
    }
}
