//! Product detail page extraction
//!
//! Fetches one discovered product page and applies the brand's CSS
//! selectors to pull out names and the size text, then derives normalized
//! dimensions and minimum site-footprint requirements.

use crate::config::BrandTarget;
use crate::crawler::{fetch_page, FetchFailure, FetchResult};
use crate::extract::dims::{area_m2, margin_for, parse_width_depth, with_margin};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Serialize;

/// One extracted product with normalized dimensions
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductRow {
    pub brand: String,
    pub brand_ko: String,
    pub category: String,
    pub product_name_ko: String,
    pub product_name_en: String,
    pub size_width_m: Option<f64>,
    pub size_depth_m: Option<f64>,
    pub area_m2: Option<f64>,
    pub min_site_width_m: Option<f64>,
    pub min_site_depth_m: Option<f64>,
    pub min_site_area_m2: Option<f64>,
}

impl ProductRow {
    /// A row is worth keeping only if it carries a name or a width
    pub fn is_meaningful(&self) -> bool {
        !self.product_name_ko.is_empty()
            || !self.product_name_en.is_empty()
            || self.size_width_m.is_some()
    }

    /// Dedup key across the whole run: brand plus both product names
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.brand.clone(),
            self.product_name_ko.clone(),
            self.product_name_en.clone(),
        )
    }
}

/// Fetches a product page and extracts a row from it
///
/// # Arguments
///
/// * `client` - The HTTP client to fetch with
/// * `url` - The product page URL
/// * `brand` - The brand target supplying selectors and category
///
/// # Returns
///
/// * `Ok(ProductRow)` - The extracted row (may still be empty; see
///   [`ProductRow::is_meaningful`])
/// * `Err(FetchFailure)` - The page could not be fetched
pub async fn scrape_product(
    client: &Client,
    url: &str,
    brand: &BrandTarget,
) -> Result<ProductRow, FetchFailure> {
    let body = match fetch_page(client, url).await {
        FetchResult::Success { body, .. } => body,
        FetchResult::Failed { failure } => return Err(failure),
    };

    Ok(extract_row(&body, brand))
}

/// Builds a product row from page HTML using the brand's selectors
pub fn extract_row(html: &str, brand: &BrandTarget) -> ProductRow {
    let document = Html::parse_document(html);

    let name_ko = select_text(&document, &brand.selectors.name_ko);
    let name_en = select_text(&document, &brand.selectors.name_en);
    let size_text = select_text(&document, &brand.selectors.size);

    let dims = parse_width_depth(&size_text);
    let margin = margin_for(&brand.category);

    let (size_width_m, size_depth_m) = match dims {
        Some((w, d)) => (Some(w), Some(d)),
        None => (None, None),
    };

    let area = dims.map(|(w, d)| area_m2(w, d));
    let min_w = size_width_m.map(|w| with_margin(w, margin));
    let min_d = size_depth_m.map(|d| with_margin(d, margin));
    let min_area = match (min_w, min_d) {
        (Some(w), Some(d)) => Some(area_m2(w, d)),
        _ => None,
    };

    ProductRow {
        brand: brand.brand.clone(),
        brand_ko: brand.brand_ko.clone(),
        category: brand.category.clone(),
        product_name_ko: name_ko,
        product_name_en: name_en,
        size_width_m,
        size_depth_m,
        area_m2: area,
        min_site_width_m: min_w,
        min_site_depth_m: min_d,
        min_site_area_m2: min_area,
    }
}

/// Returns the trimmed text of the first element matching the selector
///
/// An empty or unparseable selector yields an empty string.
fn select_text(document: &Html, selector: &str) -> String {
    if selector.is_empty() {
        return String::new();
    }

    let parsed = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&parsed)
        .next()
        .map(|el| el.text().map(str::trim).collect::<String>())
        .unwrap_or_default()
}
