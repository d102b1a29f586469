use crate::UrlError;
use url::Url;

/// Parses the base URL a scan starts from
///
/// Only `http` and `https` URLs with a host are accepted, since every other
/// URL the scanner builds is joined onto this one.
///
/// # Examples
///
/// ```
/// use sitemap_seo::url::parse_base_url;
///
/// let base = parse_base_url("https://example.com/blog?page=2").unwrap();
/// assert_eq!(base.host_str(), Some("example.com"));
/// ```
pub fn parse_base_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim())
        .map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    Ok(url)
}

/// Resolves a possibly-relative reference against a base URL
///
/// Follows standard URL-join semantics: absolute references are returned
/// unchanged, root-relative ones replace the base path, and the base's query
/// and fragment never carry over.
///
/// # Examples
///
/// ```
/// use sitemap_seo::url::{parse_base_url, resolve_reference};
///
/// let base = parse_base_url("https://x.com").unwrap();
/// let resolved = resolve_reference(&base, "/foo.xml").unwrap();
/// assert_eq!(resolved.as_str(), "https://x.com/foo.xml");
/// ```
pub fn resolve_reference(base: &Url, reference: &str) -> Result<Url, UrlError> {
    base.join(reference.trim())
        .map_err(|e| UrlError::Parse(format!("{}: {}", reference, e)))
}

/// Returns true if the URL points at a robots.txt file
pub fn is_robots_txt(url: &Url) -> bool {
    url.path().ends_with("robots.txt")
}
