use regex::Regex;
use url::Url;

/// Returns true if the URL string contains a match for the product-link pattern
///
/// The pattern is searched anywhere in the full URL string, not anchored.
/// Classification happens on the URL string alone; the target page does not
/// need to be fetched for a link to be classified as a product page.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use fitground::url::matches_pattern;
///
/// let pattern = Regex::new("/product/").unwrap();
/// assert!(matches_pattern("https://example.com/product/42", &pattern));
/// assert!(!matches_pattern("https://example.com/blog/42", &pattern));
/// ```
pub fn matches_pattern(url: &str, pattern: &Regex) -> bool {
    pattern.is_match(url)
}

/// Returns true if the URL's path is admitted by the allow-list
///
/// An empty allow-list admits every path. Otherwise the normalized path
/// (query and fragment excluded) must start with at least one entry;
/// the comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use fitground::url::path_allowed;
///
/// let url = Url::parse("https://example.com/shop/item-1?ref=x").unwrap();
/// assert!(path_allowed(&url, &["/shop".to_string()]));
/// assert!(!path_allowed(&url, &["/blog".to_string()]));
/// assert!(path_allowed(&url, &[]));
/// ```
pub fn path_allowed(url: &Url, allow_paths: &[String]) -> bool {
    if allow_paths.is_empty() {
        return true;
    }

    let path = url.path();
    allow_paths.iter().any(|prefix| path.starts_with(prefix))
}
