use crate::config::types::{BrandTarget, Config, FetchConfig, UserAgentConfig};
use crate::ConfigError;
use regex::Regex;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_brands(&config.brands)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 || config.request_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be between 1 and 300, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &crate::config::types::OutputConfig) -> Result<(), ConfigError> {
    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates all brand targets
fn validate_brands(brands: &[BrandTarget]) -> Result<(), ConfigError> {
    let mut seen_keys = HashSet::new();

    for brand in brands {
        validate_key(&brand.key)?;

        if !seen_keys.insert(brand.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate brand key '{}'",
                brand.key
            )));
        }

        validate_brand(brand)?;
    }

    Ok(())
}

/// Validates a single brand target
fn validate_brand(brand: &BrandTarget) -> Result<(), ConfigError> {
    // An empty base URL is allowed: the crawler no-ops for that brand.
    if !brand.base_url.is_empty() {
        let url = Url::parse(&brand.base_url).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid base_url for brand '{}': {}",
                brand.key, e
            ))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "base_url for brand '{}' must use http or https, got '{}'",
                brand.key,
                url.scheme()
            )));
        }
    }

    if !brand.sitemap_url.is_empty() {
        Url::parse(&brand.sitemap_url).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid sitemap_url for brand '{}': {}",
                brand.key, e
            ))
        })?;
    }

    Regex::new(&brand.product_link_pattern).map_err(|e| {
        ConfigError::InvalidPattern(format!(
            "product_link_pattern for brand '{}' does not compile: {}",
            brand.key, e
        ))
    })?;

    if brand.limits.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages for brand '{}' must be >= 1, got {}",
            brand.key, brand.limits.max_pages
        )));
    }

    for path in &brand.allow_paths {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "allow_paths entry '{}' for brand '{}' must start with '/'",
                path, brand.key
            )));
        }
    }

    Ok(())
}

/// Validates a brand key (slug: lowercase alphanumeric and hyphens)
fn validate_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::Validation(
            "Brand key cannot be empty".to_string(),
        ));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "Brand key '{}' must contain only lowercase letters, digits, and hyphens",
            key
        )));
    }

    if key.starts_with('-') || key.ends_with('-') {
        return Err(ConfigError::Validation(format!(
            "Brand key '{}' cannot start or end with '-'",
            key
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{CrawlLimits, Selectors};

    fn test_brand(key: &str, base_url: &str) -> BrandTarget {
        BrandTarget {
            key: key.to_string(),
            brand: "Test Brand".to_string(),
            brand_ko: String::new(),
            category: "tent".to_string(),
            base_url: base_url.to_string(),
            sitemap_url: String::new(),
            allow_paths: vec![],
            product_link_pattern: "/product/".to_string(),
            limits: CrawlLimits::default(),
            selectors: Selectors::default(),
        }
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("hilltop").is_ok());
        assert!(validate_key("big-agnes-2").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key("Big Agnes").is_err());
        assert!(validate_key("-leading").is_err());
        assert!(validate_key("trailing-").is_err());
    }

    #[test]
    fn test_empty_base_url_allowed() {
        let brand = test_brand("no-site", "");
        assert!(validate_brand(&brand).is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let brand = test_brand("bad", "not a url");
        assert!(validate_brand(&brand).is_err());

        let brand = test_brand("ftp", "ftp://example.com/");
        assert!(validate_brand(&brand).is_err());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut brand = test_brand("bad-pattern", "https://example.com/");
        brand.product_link_pattern = "(unclosed".to_string();
        let result = validate_brand(&brand);
        assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let mut brand = test_brand("zero", "https://example.com/");
        brand.limits.max_pages = 0;
        assert!(validate_brand(&brand).is_err());
    }

    #[test]
    fn test_allow_paths_must_be_absolute() {
        let mut brand = test_brand("paths", "https://example.com/");
        brand.allow_paths = vec!["shop".to_string()];
        assert!(validate_brand(&brand).is_err());

        brand.allow_paths = vec!["/shop".to_string()];
        assert!(validate_brand(&brand).is_ok());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let brands = vec![
            test_brand("dup", "https://a.example.com/"),
            test_brand("dup", "https://b.example.com/"),
        ];
        assert!(validate_brands(&brands).is_err());
    }
}
