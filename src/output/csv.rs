//! CSV snapshot writer
//!
//! Writes the extracted product rows twice: once to a UTC-timestamped
//! snapshot (`tents_YYYYMMDDTHHMMSSZ.csv`) and once to `latest.csv`,
//! which always reflects the most recent run. Missing numeric values are
//! written as empty cells.

use crate::extract::ProductRow;
use crate::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Fixed column order of every snapshot
const COLUMNS: &[&str] = &[
    "brand",
    "brand_ko",
    "category",
    "product_name_ko",
    "product_name_en",
    "size_width_m",
    "size_depth_m",
    "area_m2",
    "min_site_width_m",
    "min_site_depth_m",
    "min_site_area_m2",
];

/// Writes the timestamped snapshot and `latest.csv`
///
/// # Arguments
///
/// * `output_dir` - Directory for snapshots (created if missing)
/// * `rows` - Extracted product rows, already deduplicated
/// * `now` - Timestamp used in the snapshot filename
///
/// # Returns
///
/// Paths of (snapshot, latest)
pub fn write_snapshots(
    output_dir: &Path,
    rows: &[ProductRow],
    now: DateTime<Utc>,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir)?;

    let stamp = now.format("%Y%m%dT%H%M%SZ");
    let snapshot = output_dir.join(format!("tents_{}.csv", stamp));
    let latest = output_dir.join("latest.csv");

    let content = render_csv(rows);
    std::fs::write(&snapshot, &content)?;
    std::fs::write(&latest, &content)?;

    tracing::info!(
        "Saved snapshot {} ({} rows)",
        snapshot.display(),
        rows.len()
    );

    Ok((snapshot, latest))
}

/// Renders rows as CSV text with a header line
pub fn render_csv(rows: &[ProductRow]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');

    for row in rows {
        let cells = [
            escape_cell(&row.brand),
            escape_cell(&row.brand_ko),
            escape_cell(&row.category),
            escape_cell(&row.product_name_ko),
            escape_cell(&row.product_name_en),
            number_cell(row.size_width_m),
            number_cell(row.size_depth_m),
            number_cell(row.area_m2),
            number_cell(row.min_site_width_m),
            number_cell(row.min_site_depth_m),
            number_cell(row.min_site_area_m2),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

/// Quotes a cell when it contains a comma, quote, or newline
fn escape_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Formats an optional number; absent values become empty cells
fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_row() -> ProductRow {
        ProductRow {
            brand: "Hilltop".to_string(),
            brand_ko: "힐탑".to_string(),
            category: "tent".to_string(),
            product_name_ko: "알파인 돔".to_string(),
            product_name_en: "Alpine Dome".to_string(),
            size_width_m: Some(3.0),
            size_depth_m: Some(2.4),
            area_m2: Some(7.2),
            min_site_width_m: Some(3.3),
            min_site_depth_m: Some(2.64),
            min_site_area_m2: Some(8.712),
        }
    }

    #[test]
    fn test_render_header_only_for_empty_rows() {
        let csv = render_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("brand,brand_ko,category"));
    }

    #[test]
    fn test_render_row_values() {
        let csv = render_csv(&[test_row()]);
        let data_line = csv.lines().nth(1).unwrap();
        assert_eq!(
            data_line,
            "Hilltop,힐탑,tent,알파인 돔,Alpine Dome,3,2.4,7.2,3.3,2.64,8.712"
        );
    }

    #[test]
    fn test_missing_numbers_are_empty_cells() {
        let mut row = test_row();
        row.size_width_m = None;
        row.size_depth_m = None;
        row.area_m2 = None;
        row.min_site_width_m = None;
        row.min_site_depth_m = None;
        row.min_site_area_m2 = None;

        let csv = render_csv(&[row]);
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.ends_with("Alpine Dome,,,,,,"));
    }

    #[test]
    fn test_escape_comma_and_quote() {
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("plain"), "plain");
    }

    #[test]
    fn test_write_snapshots() {
        let dir = tempdir().unwrap();
        let now = "2026-08-29T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let (snapshot, latest) = write_snapshots(dir.path(), &[test_row()], now).unwrap();
        assert!(snapshot.ends_with("tents_20260829T120000Z.csv"));
        assert!(latest.ends_with("latest.csv"));

        let snap_content = std::fs::read_to_string(&snapshot).unwrap();
        let latest_content = std::fs::read_to_string(&latest).unwrap();
        assert_eq!(snap_content, latest_content);
        assert_eq!(snap_content.lines().count(), 2);
    }
}
