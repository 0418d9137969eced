//! Hyperlink extraction from fetched pages
//!
//! Pulls `<a href>` targets out of HTML and resolves them against the page
//! they were found on (relative-reference resolution against the current
//! page, not the crawl seed).

use scraper::{Html, Selector};
use url::Url;

/// Extracts all hyperlink targets from an HTML page as absolute URLs
///
/// Excluded hrefs:
/// - `javascript:`, `mailto:`, `tel:` schemes and `data:` URIs
/// - fragment-only links (same-page anchors)
/// - anything that fails to resolve, or resolves to a non-HTTP(S) scheme
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The URL of the page the HTML came from
pub fn extract_links(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_link(href, page_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute URL, filtering out non-page targets
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Same-page anchors
    if href.starts_with('#') {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
