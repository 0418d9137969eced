use serde::Deserialize;

/// Main configuration structure for FitGround
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub brands: Vec<BrandTarget>,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Total request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Minimum delay between consecutive fetches (politeness gap, milliseconds)
    #[serde(rename = "request-gap-ms", default = "default_gap_ms")]
    pub request_gap_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
            request_gap_ms: default_gap_ms(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+ContactUrl)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where snapshots and URL artifacts are written
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// One brand website to crawl and extract products from
#[derive(Debug, Clone, Deserialize)]
pub struct BrandTarget {
    /// Unique slug identifying this brand (used in artifact filenames)
    pub key: String,

    /// Brand name (English)
    #[serde(default)]
    pub brand: String,

    /// Brand name (Korean)
    #[serde(rename = "brand-ko", default)]
    pub brand_ko: String,

    /// Product category: "tent", "shelter", or "tarp"
    #[serde(default = "default_category")]
    pub category: String,

    /// Crawl root and host-scope anchor. Empty means the brand is skipped.
    #[serde(rename = "base-url", default)]
    pub base_url: String,

    /// Optional XML sitemap URL, tried before link traversal
    #[serde(rename = "sitemap-url", default)]
    pub sitemap_url: String,

    /// Path prefixes admitted during traversal; empty allows all paths
    #[serde(rename = "allow-paths", default)]
    pub allow_paths: Vec<String>,

    /// Regex classifying a URL as a product detail page (searched, not anchored)
    #[serde(rename = "product-link-pattern", default = "default_product_pattern")]
    pub product_link_pattern: String,

    #[serde(default)]
    pub limits: CrawlLimits,

    #[serde(default)]
    pub selectors: Selectors,
}

/// Hard caps bounding one brand crawl
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlLimits {
    /// Maximum number of pages fetched (attempted fetches count)
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum BFS depth from the seed page
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            max_depth: default_max_depth(),
        }
    }
}

/// CSS selectors used to pull product fields out of a detail page
#[derive(Debug, Clone, Deserialize)]
pub struct Selectors {
    #[serde(rename = "name-ko", default = "default_name_ko_selector")]
    pub name_ko: String,

    #[serde(rename = "name-en", default)]
    pub name_en: String,

    #[serde(default = "default_size_selector")]
    pub size: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            name_ko: default_name_ko_selector(),
            name_en: String::new(),
            size: default_size_selector(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    25
}

fn default_gap_ms() -> u64 {
    1000
}

fn default_crawler_name() -> String {
    "FitGroundBot".to_string()
}

fn default_crawler_version() -> String {
    "1.0".to_string()
}

fn default_contact_url() -> String {
    "https://github.com/FitGround".to_string()
}

fn default_output_dir() -> String {
    "brand_outputs".to_string()
}

fn default_category() -> String {
    "tent".to_string()
}

fn default_product_pattern() -> String {
    "/product/".to_string()
}

fn default_max_pages() -> usize {
    200
}

fn default_max_depth() -> u32 {
    3
}

fn default_name_ko_selector() -> String {
    "h1, .product-title, .title".to_string()
}

fn default_size_selector() -> String {
    ".spec, .size, .dimension, .dimensions".to_string()
}
