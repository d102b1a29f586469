//! In-memory fetcher shared by unit tests

use crate::crawler::fetcher::{FetchedPage, PageFetcher};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned responses keyed by URL and records every fetch.
///
/// URLs without a canned response behave like failed fetches.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, (u16, String)>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a 200 response for `url`
    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_response(url, 200, body)
    }

    pub fn with_response(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), (status, body.to_string()));
        self
    }

    /// URLs fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Option<FetchedPage> {
        self.calls.lock().unwrap().push(url.to_string());
        let (status_code, body) = self.responses.get(url)?.clone();

        Some(FetchedPage {
            url: url.to_string(),
            status_code,
            body,
        })
    }
}

/// Builds a `<urlset>` sitemap listing `locs`
pub fn urlset(locs: &[&str]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<url><loc>{}</loc></url>", loc))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</urlset>"#,
        entries
    )
}

/// Builds a `<sitemapindex>` listing `locs`
pub fn sitemap_index(locs: &[&str]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<sitemap><loc>{}</loc></sitemap>", loc))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</sitemapindex>"#,
        entries
    )
}
