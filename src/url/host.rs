use url::Url;

/// Extracts the host from a URL, lowercased
///
/// Returns None if the URL has no host (which should not happen for
/// valid HTTP(S) URLs).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use fitground::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if two URLs point at the same host and port
///
/// This mirrors network-location equality: scheme is ignored, but an
/// explicit non-default port makes two otherwise equal hosts differ.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use fitground::url::same_host;
///
/// let a = Url::parse("https://example.com/shop").unwrap();
/// let b = Url::parse("https://example.com/blog").unwrap();
/// let c = Url::parse("https://other.com/shop").unwrap();
/// assert!(same_host(&a, &b));
/// assert!(!same_host(&a, &c));
/// ```
pub fn same_host(a: &Url, b: &Url) -> bool {
    extract_host(a) == extract_host(b) && a.port_or_known_default() == b.port_or_known_default()
}
