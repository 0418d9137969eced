//! FitGround: camping-gear product discovery and site-footprint extraction
//!
//! This crate discovers product pages on camping-gear brand websites with a
//! bounded breadth-first crawler, extracts tent/shelter dimension data from
//! the discovered pages, normalizes units to meters, and computes derived
//! site-footprint requirements written to CSV snapshots.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for FitGround operations
#[derive(Debug, Error)]
pub enum FitGroundError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid product-link pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for FitGround operations
pub type Result<T> = std::result::Result<T, FitGroundError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{BrandTarget, Config};
pub use crawler::{discover_products, CrawlState};
pub use url::{matches_pattern, path_allowed, same_host};
