//! Sitemap reader
//!
//! A sitemap, when a brand provides one, is a high-confidence seed for
//! product discovery: it is fetched once before link traversal begins and
//! its matching entries go straight into the product set. Every failure
//! mode (missing URL, network error, non-2xx, malformed XML) degrades to
//! an empty set; sitemap problems never fail a crawl.

use crate::crawler::fetcher::{fetch_page, FetchResult};
use crate::url::{matches_pattern, same_host};
use regex::Regex;
use reqwest::Client;
use std::collections::BTreeSet;
use url::Url;

/// Fetches an XML sitemap and returns the product URLs listed in it
///
/// A location entry is kept if and only if its host equals the base URL's
/// host and the product-link pattern matches the URL string.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `sitemap_url` - Absolute sitemap URL; empty means no request is made
/// * `base` - The crawl root, used as the host-scope anchor
/// * `pattern` - The compiled product-link pattern
pub async fn read_sitemap(
    client: &Client,
    sitemap_url: &str,
    base: &Url,
    pattern: &Regex,
) -> BTreeSet<String> {
    let mut products = BTreeSet::new();

    if sitemap_url.is_empty() {
        return products;
    }

    let body = match fetch_page(client, sitemap_url).await {
        FetchResult::Success { body, .. } => body,
        FetchResult::Failed { failure } => {
            tracing::warn!("Sitemap {} unavailable: {}", sitemap_url, failure);
            return products;
        }
    };

    for loc in extract_locations(&body) {
        let parsed = match Url::parse(&loc) {
            Ok(u) => u,
            Err(_) => continue,
        };

        if same_host(&parsed, base) && matches_pattern(&loc, pattern) {
            products.insert(loc);
        }
    }

    tracing::debug!(
        "Sitemap {} yielded {} product URLs",
        sitemap_url,
        products.len()
    );

    products
}

/// Extracts `<loc>` entry texts from sitemap XML
fn extract_locations(xml: &str) -> Vec<String> {
    let mut locations = Vec::new();

    if let Ok(loc_re) = Regex::new(r"<loc>\s*([^<]+?)\s*</loc>") {
        for capture in loc_re.captures_iter(xml) {
            locations.push(capture[1].to_string());
        }
    }

    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_locations() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <url>
        <loc>https://example.com/product/42</loc>
        <lastmod>2024-01-01</lastmod>
    </url>
    <url>
        <loc> https://example.com/about </loc>
    </url>
</urlset>"#;

        let locations = extract_locations(xml);
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0], "https://example.com/product/42");
        assert_eq!(locations[1], "https://example.com/about");
    }

    #[test]
    fn test_extract_locations_from_garbage() {
        assert!(extract_locations("not xml at all").is_empty());
        assert!(extract_locations("").is_empty());
    }

    #[test]
    fn test_extract_locations_ignores_unclosed_tags() {
        let xml = "<loc>https://example.com/a</loc><loc>https://example.com/b";
        let locations = extract_locations(xml);
        assert_eq!(locations, vec!["https://example.com/a".to_string()]);
    }
}
