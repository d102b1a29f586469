//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the scanner:
//! - Building the HTTP client with the configured timeout
//! - Rotating browser user agents per request
//! - Collapsing every failure into an absent response

use crate::config::{ScannerConfig, UserAgentConfig, DEFAULT_USER_AGENTS};
use rand::seq::SliceRandom;
use reqwest::{header, Client};
use std::future::Future;
use std::time::Duration;

/// A successfully fetched response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Response body
    pub body: String,
}

/// Source of fetched pages
///
/// The sitemap resolver and the scrape orchestrator only need "fetch this
/// URL, or tell me it failed". Failures are never distinguished from each
/// other: a timeout, a DNS error and a 404 all come back as `None`.
pub trait PageFetcher {
    /// Fetches a single URL
    fn fetch(&self, url: &str) -> impl Future<Output = Option<FetchedPage>> + Send;
}

/// reqwest-backed [`PageFetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    user_agents: Vec<String>,
}

impl HttpFetcher {
    /// Creates a fetcher with an explicit timeout and user agent pool
    ///
    /// An empty pool falls back to the built-in browser user agents.
    pub fn new(timeout: Duration, user_agents: Vec<String>) -> Result<Self, reqwest::Error> {
        let user_agents = if user_agents.is_empty() {
            DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
        } else {
            user_agents
        };

        Ok(Self {
            client: build_http_client(timeout)?,
            user_agents,
        })
    }

    /// Creates a fetcher from the scanner and user agent configuration
    pub fn from_config(
        scanner: &ScannerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Self::new(
            Duration::from_secs(scanner.request_timeout_secs),
            user_agent.pool.clone(),
        )
    }

    /// Picks a user agent uniformly at random from the pool
    pub fn random_user_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_USER_AGENTS[0])
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<FetchedPage>> + Send {
        let user_agent = self.random_user_agent().to_string();
        let request = self
            .client
            .get(url)
            .header(header::USER_AGENT, user_agent);
        let url = url.to_string();

        async move { fetch_url(request, url).await }
    }
}

/// Builds an HTTP client with the given per-request timeout
///
/// Redirects follow reqwest's default policy; the user agent is set per
/// request rather than on the client.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends a prepared GET request and reads the body
///
/// # Returns
///
/// * `Some(FetchedPage)` - 2xx response with a readable body
/// * `None` - Timeout, connection failure, non-2xx status or unreadable body
async fn fetch_url(request: reqwest::RequestBuilder, url: String) -> Option<FetchedPage> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            if e.is_timeout() {
                tracing::debug!("Request timeout for {}", url);
            } else if e.is_connect() {
                tracing::debug!("Connection failed for {}: {}", url, e);
            } else {
                tracing::debug!("Request failed for {}: {}", url, e);
            }
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("HTTP {} for {}", status.as_u16(), url);
        return None;
    }

    match response.text().await {
        Ok(body) => Some(FetchedPage {
            url,
            status_code: status.as_u16(),
            body,
        }),
        Err(e) => {
            tracing::debug!("Failed to read body of {}: {}", url, e);
            None
        }
    }
}
