//! HTML/XML extraction for sitemaps and pages
//!
//! Both sitemap XML and page HTML go through scraper's HTML parser, which is
//! lenient enough to expose `<loc>` elements from sitemap documents. This
//! module handles:
//! - `<loc>` values from sitemaps and sitemap indexes
//! - Title, first H1 and meta description from HTML pages

use scraper::{ElementRef, Html, Selector};

/// SEO fields extracted from an HTML page
///
/// Missing elements come back as empty strings, never as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Text of the first `<title>` element
    pub title: String,

    /// Text of the first `<h1>` element
    pub h1: String,

    /// `content` attribute of `<meta name="description">`
    pub meta_description: String,
}

/// Extracts all `<loc>` values from a sitemap document
///
/// Values are trimmed; empty `<loc>` elements are skipped. Document order is
/// preserved. Page fields from [`parse_page`] are returned as written.
///
/// # Example
///
/// ```
/// use sitemap_seo::crawler::extract_locs;
///
/// let xml = r#"<urlset><url><loc>https://example.com/a</loc></url></urlset>"#;
/// assert_eq!(extract_locs(xml), vec!["https://example.com/a"]);
/// ```
pub fn extract_locs(content: &str) -> Vec<String> {
    let document = Html::parse_document(content);
    let Ok(loc_selector) = Selector::parse("loc") else {
        return Vec::new();
    };

    document
        .select(&loc_selector)
        .map(|element| element_text(element).trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect()
}

/// Parses HTML content and extracts the page's SEO fields
///
/// # Example
///
/// ```
/// use sitemap_seo::crawler::parse_page;
///
/// let html = r#"<html><head><title>A</title></head><body><h1>B</h1></body></html>"#;
/// let meta = parse_page(html);
/// assert_eq!(meta.title, "A");
/// assert_eq!(meta.h1, "B");
/// assert_eq!(meta.meta_description, "");
/// ```
pub fn parse_page(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    PageMetadata {
        title: first_text(&document, "title"),
        h1: first_text(&document, "h1"),
        meta_description: extract_meta_description(&document),
    }
}

/// Returns the text of the first element matching `selector`, untrimmed
fn first_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Extracts the meta description content attribute
fn extract_meta_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
