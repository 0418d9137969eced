//! Product data extraction module
//!
//! Turns discovered product pages into normalized rows: CSS-selector
//! field extraction, dimension text parsing, unit conversion to meters,
//! and derived site-footprint requirements.

pub mod dims;
mod product;

pub use dims::{area_m2, margin_for, parse_width_depth, to_meters, with_margin};
pub use product::{extract_row, scrape_product, ProductRow};
