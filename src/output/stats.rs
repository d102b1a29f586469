//! Scan statistics
//!
//! Counters collected while a scan runs, reported once at the end.

/// Scan statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Sitemaps found by discovery
    pub sitemaps_discovered: usize,

    /// Sitemap URLs fetched while resolving, nested ones included
    pub sitemaps_visited: usize,

    /// Page URLs produced by resolution
    pub pages_resolved: usize,

    /// Pages that produced a record
    pub pages_scraped: usize,

    /// Pages dropped because their fetch failed
    pub pages_failed: usize,
}

impl ScanStatistics {
    /// Fraction of resolved pages that produced a record
    pub fn success_rate(&self) -> f64 {
        if self.pages_resolved == 0 {
            return 0.0;
        }
        self.pages_scraped as f64 / self.pages_resolved as f64
    }
}

/// Logs the statistics as a single summary line
pub fn log_statistics(stats: &ScanStatistics) {
    tracing::info!(
        "Sitemaps: {} discovered, {} visited | Pages: {} resolved, {} scraped, {} failed ({:.1}% success)",
        stats.sitemaps_discovered,
        stats.sitemaps_visited,
        stats.pages_resolved,
        stats.pages_scraped,
        stats.pages_failed,
        stats.success_rate() * 100.0
    );
}
