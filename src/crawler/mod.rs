//! Crawler module for product-page discovery
//!
//! This module contains the bounded discovery crawler:
//! - HTTP fetching with a typed success/failure result
//! - Sitemap reading (tried first, failures degrade silently)
//! - Hyperlink extraction and relative-reference resolution
//! - Bounded breadth-first traversal with page and depth caps

mod fetcher;
mod frontier;
mod parser;
mod sitemap;

pub use fetcher::{build_http_client, fetch_page, FetchFailure, FetchResult};
pub use frontier::{discover_products, CrawlState};
pub use parser::extract_links;
pub use sitemap::read_sitemap;
