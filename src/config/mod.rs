//! Configuration module for FitGround
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use fitground::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("brands.toml")).unwrap();
//! println!("Crawling {} brands", config.brands.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BrandTarget, Config, CrawlLimits, FetchConfig, OutputConfig, Selectors, UserAgentConfig,
};

// Re-export parser functions
pub use parser::load_config;
