//! Per-brand discovered-URL artifacts
//!
//! After discovery, each brand's sorted product URL list is written as a
//! JSON array to `discovered_urls_{key}.json` for downstream consumers.

use crate::Result;
use std::path::{Path, PathBuf};

/// Writes one brand's discovered product URLs as a JSON array
///
/// # Arguments
///
/// * `output_dir` - Directory for artifacts (created if missing)
/// * `key` - The brand key, used in the filename
/// * `urls` - Sorted product URLs
///
/// # Returns
///
/// The path of the written artifact
pub fn write_discovered_urls(output_dir: &Path, key: &str, urls: &[String]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let path = output_dir.join(format!("discovered_urls_{}.json", key));
    let json = serde_json::to_string_pretty(urls)?;
    std::fs::write(&path, json)?;

    tracing::debug!("Wrote {} URLs to {}", urls.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_discovered_urls() {
        let dir = tempdir().unwrap();
        let urls = vec![
            "https://example.com/product/1".to_string(),
            "https://example.com/product/2".to_string(),
        ];

        let path = write_discovered_urls(dir.path(), "hilltop", &urls).unwrap();
        assert!(path.ends_with("discovered_urls_hilltop.json"));

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, urls);
    }

    #[test]
    fn test_write_empty_list() {
        let dir = tempdir().unwrap();
        let path = write_discovered_urls(dir.path(), "empty-brand", &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep/artifacts");
        assert!(write_discovered_urls(&nested, "x", &[]).is_ok());
    }
}
