//! Bounded breadth-first frontier traversal
//!
//! This is the discovery core: starting from a brand's base URL, it walks
//! same-host hyperlinks in strict FIFO order, bounded by a page budget and
//! a depth cap, collecting every URL that matches the brand's product-link
//! pattern. A sitemap, when configured, seeds the product set before
//! traversal starts.
//!
//! All crawl state lives in a single [`CrawlState`] value owned by one
//! invocation; nothing persists across calls and nothing is shared.

use crate::config::{BrandTarget, FetchConfig};
use crate::crawler::fetcher::{fetch_page, FetchResult};
use crate::crawler::parser::extract_links;
use crate::crawler::sitemap::read_sitemap;
use crate::url::{matches_pattern, path_allowed, same_host};
use regex::Regex;
use reqwest::Client;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Ephemeral state owned by a single crawl invocation
#[derive(Debug, Default)]
pub struct CrawlState {
    /// URLs already dequeued for fetching; grows monotonically and counts
    /// attempted fetches against the page budget, successful or not
    pub visited: HashSet<String>,

    /// URLs classified as product pages; sorted for deterministic output
    pub products: BTreeSet<String>,

    /// FIFO queue of (url, depth) pairs driving breadth-first order
    pub frontier: VecDeque<(Url, u32)>,
}

impl CrawlState {
    /// Creates a fresh crawl state seeded with the given product URLs
    pub fn seeded(products: BTreeSet<String>) -> Self {
        Self {
            visited: HashSet::new(),
            products,
            frontier: VecDeque::new(),
        }
    }
}

/// Discovers product-page URLs for one brand
///
/// Runs the sitemap reader first (its matches seed the product set
/// unconditionally), then a bounded BFS over same-host hyperlinks. The
/// returned list is deduplicated and sorted lexicographically.
///
/// This function cannot fail: an empty base URL, an unreachable seed, or
/// any individual page failure all degrade to whatever was discovered,
/// possibly an empty list.
///
/// # Arguments
///
/// * `client` - The HTTP client to fetch with
/// * `brand` - The brand target (base URL, sitemap, pattern, limits)
/// * `fetch` - Fetch configuration (politeness gap)
pub async fn discover_products(
    client: &Client,
    brand: &BrandTarget,
    fetch: &FetchConfig,
) -> Vec<String> {
    // A brand without a resolved site is a no-op, not an error.
    if brand.base_url.is_empty() {
        tracing::debug!("Brand '{}' has no base URL, skipping", brand.key);
        return Vec::new();
    }

    let base = match Url::parse(&brand.base_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!("Brand '{}' base URL unparseable: {}", brand.key, e);
            return Vec::new();
        }
    };

    // Validated at config load; a failure here still degrades gracefully.
    let pattern = match Regex::new(&brand.product_link_pattern) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Brand '{}' pattern does not compile: {}", brand.key, e);
            return Vec::new();
        }
    };

    // Sitemap first: runs unconditionally, independent of traversal.
    let sitemap_products = read_sitemap(client, &brand.sitemap_url, &base, &pattern).await;
    let mut state = CrawlState::seeded(sitemap_products);
    state.frontier.push_back((base.clone(), 0));

    let gap = Duration::from_millis(fetch.request_gap_ms);
    let max_pages = brand.limits.max_pages;
    let max_depth = brand.limits.max_depth;

    while state.visited.len() < max_pages {
        let (url, depth) = match state.frontier.pop_front() {
            Some(entry) => entry,
            None => break,
        };

        // Discarded nodes consume no page budget and incur no delay.
        if state.visited.contains(url.as_str()) || depth > max_depth {
            continue;
        }

        // Counts toward max_pages regardless of fetch outcome.
        state.visited.insert(url.to_string());

        match fetch_page(client, url.as_str()).await {
            FetchResult::Success { body, .. } => {
                let links = extract_links(&body, &url);
                admit_links(&mut state, links, &base, &brand.allow_paths, &pattern, depth);
            }
            FetchResult::Failed { failure } => {
                // Non-fatal: the node is abandoned, the crawl continues.
                tracing::warn!("Fetch failed for {}: {}", url, failure);
            }
        }

        // Politeness gap after every fetch attempt.
        tokio::time::sleep(gap).await;
    }

    tracing::info!(
        "Brand '{}': {} pages fetched, {} product URLs",
        brand.key,
        state.visited.len(),
        state.products.len()
    );

    state.products.into_iter().collect()
}

/// Classifies and enqueues one page's outbound links
///
/// Cross-host links are dropped before any classification. A link that
/// matches the product pattern is recorded even when it is never enqueued
/// or fetched. Duplicate enqueues of a not-yet-visited URL are allowed;
/// the dequeue-time visited check prevents double fetching.
fn admit_links(
    state: &mut CrawlState,
    links: Vec<Url>,
    base: &Url,
    allow_paths: &[String],
    pattern: &Regex,
    depth: u32,
) {
    for link in links {
        if !same_host(&link, base) {
            continue;
        }

        if !path_allowed(&link, allow_paths) {
            continue;
        }

        if matches_pattern(link.as_str(), pattern) {
            state.products.insert(link.to_string());
        }

        if !state.visited.contains(link.as_str()) {
            state.frontier.push_back((link, depth + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    fn link(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn pattern(p: &str) -> Regex {
        Regex::new(p).unwrap()
    }

    #[test]
    fn test_cross_host_links_dropped() {
        let mut state = CrawlState::default();
        admit_links(
            &mut state,
            vec![link("https://other.com/product/1")],
            &base(),
            &[],
            &pattern("product"),
            0,
        );

        assert!(state.products.is_empty());
        assert!(state.frontier.is_empty());
    }

    #[test]
    fn test_disallowed_path_excluded_from_frontier_and_products() {
        let mut state = CrawlState::default();
        admit_links(
            &mut state,
            vec![
                link("https://example.com/shop/item-1"),
                link("https://example.com/blog/post"),
            ],
            &base(),
            &["/shop".to_string()],
            &pattern("item"),
            0,
        );

        assert_eq!(state.products.len(), 1);
        assert!(state.products.contains("https://example.com/shop/item-1"));
        assert_eq!(state.frontier.len(), 1);
    }

    #[test]
    fn test_product_recorded_without_enqueue_requirement() {
        let mut state = CrawlState::default();
        // Mark the URL visited first; it must still be classified.
        state
            .visited
            .insert("https://example.com/product/7".to_string());

        admit_links(
            &mut state,
            vec![link("https://example.com/product/7")],
            &base(),
            &[],
            &pattern("product"),
            1,
        );

        assert!(state.products.contains("https://example.com/product/7"));
        assert!(state.frontier.is_empty());
    }

    #[test]
    fn test_duplicate_enqueues_allowed_before_first_visit() {
        let mut state = CrawlState::default();
        let l = link("https://example.com/shop/");

        admit_links(&mut state, vec![l.clone()], &base(), &[], &pattern("x"), 0);
        admit_links(&mut state, vec![l], &base(), &[], &pattern("x"), 1);

        // Same URL queued twice from different pages; dedup happens at dequeue.
        assert_eq!(state.frontier.len(), 2);
        assert_eq!(state.frontier[0].1, 1);
        assert_eq!(state.frontier[1].1, 2);
    }

    #[test]
    fn test_enqueued_depth_is_parent_plus_one() {
        let mut state = CrawlState::default();
        admit_links(
            &mut state,
            vec![link("https://example.com/a")],
            &base(),
            &[],
            &pattern("x"),
            3,
        );

        assert_eq!(state.frontier.front().unwrap().1, 4);
    }

    #[test]
    fn test_products_iterate_sorted() {
        let mut state = CrawlState::default();
        admit_links(
            &mut state,
            vec![
                link("https://example.com/product/z"),
                link("https://example.com/product/a"),
                link("https://example.com/product/m"),
            ],
            &base(),
            &[],
            &pattern("product"),
            0,
        );

        let products: Vec<String> = state.products.into_iter().collect();
        assert_eq!(
            products,
            vec![
                "https://example.com/product/a".to_string(),
                "https://example.com/product/m".to_string(),
                "https://example.com/product/z".to_string(),
            ]
        );
    }
}
