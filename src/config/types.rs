use serde::Deserialize;

/// Well-known sitemap locations checked for every base URL
pub const DEFAULT_SITEMAP_PATHS: &[&str] = &[
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap1.xml",
    "/robots.txt",
    "/de/sitemap/sitemap.xml",
];

/// Browser user agents rotated across requests
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:56.0) Gecko/20100101 Firefox/56.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
];

/// Main configuration structure for Sitemap-SEO
///
/// Every section is optional; a missing file or section falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sitemap discovery and scraping behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Number of pages fetched concurrently per batch
    #[serde(rename = "batch-size", default = "default_batch_size")]
    pub batch_size: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Relative paths checked for sitemaps, in order
    #[serde(rename = "sitemap-paths", default = "default_sitemap_paths")]
    pub sitemap_paths: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            request_timeout_secs: default_request_timeout(),
            sitemap_paths: default_sitemap_paths(),
        }
    }
}

/// User agent rotation pool
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Candidate user agent strings; one is picked at random per request
    #[serde(default = "default_user_agents")]
    pub pool: Vec<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            pool: default_user_agents(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON results file
    #[serde(rename = "json-path", default = "default_json_path")]
    pub json_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: default_json_path(),
        }
    }
}

fn default_batch_size() -> usize {
    10
}

fn default_request_timeout() -> u64 {
    10
}

fn default_sitemap_paths() -> Vec<String> {
    DEFAULT_SITEMAP_PATHS.iter().map(|p| p.to_string()).collect()
}

fn default_user_agents() -> Vec<String> {
    DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
}

fn default_json_path() -> String {
    "output.json".to_string()
}
