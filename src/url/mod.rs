//! URL handling module for Sitemap-SEO
//!
//! This module validates the base URL a scan starts from and resolves the
//! relative references found in sitemap paths and robots.txt directives.

mod resolve;

pub use resolve::{is_robots_txt, parse_base_url, resolve_reference};
