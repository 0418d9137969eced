//! Dimension text parsing and unit normalization
//!
//! Vendor sites express tent footprints in wildly inconsistent formats:
//! "300cm x 240cm", "9.8ft×7.9ft", "W210 D180", curly quotes for inches.
//! Everything here normalizes to meters.

use regex::Regex;

/// Per-category margin ratios applied to raw dimensions when computing
/// minimum site requirements
const MARGINS: &[(&str, f64)] = &[("tent", 1.10), ("shelter", 1.15), ("tarp", 1.20)];

/// Default margin for unknown categories
const DEFAULT_MARGIN: f64 = 1.10;

/// Returns the site-margin ratio for a product category
pub fn margin_for(category: &str) -> f64 {
    MARGINS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, ratio)| *ratio)
        .unwrap_or(DEFAULT_MARGIN)
}

/// Parses a single dimension value into meters
///
/// Takes the first number found in the text and scales it by the unit
/// suffix detected anywhere in the text: `cm`, `mm`, `ft`, or inches
/// (`"`, `inch`, or `in `). A bare number is taken as meters already.
/// Curly typographic quotes are normalized before matching.
///
/// Returns None when no number is present and the text does not parse as
/// a plain float.
pub fn to_meters(text: &str) -> Option<f64> {
    let s = text
        .trim()
        .to_lowercase()
        .replace('″', "\"")
        .replace('’', "'");

    if s.is_empty() {
        return None;
    }

    let number = match first_number(&s) {
        Some(n) => n,
        None => return s.parse::<f64>().ok(),
    };

    let meters = if s.contains("cm") {
        number / 100.0
    } else if s.contains("mm") {
        number / 1000.0
    } else if s.contains("ft") {
        number * 0.3048
    } else if s.contains('"') || s.contains("inch") || s.contains("in ") {
        number * 0.0254
    } else {
        number
    };

    Some(round3(meters))
}

/// Parses a size text into (width, depth) in meters
///
/// Separators `×`, `X`, and `*` are normalized to `x`, then w/h/d axis
/// markers are stripped and the first two numbers are interpreted with
/// the unit detected in the text. Returns None unless two numbers are
/// present.
pub fn parse_width_depth(text: &str) -> Option<(f64, f64)> {
    if text.trim().is_empty() {
        return None;
    }

    let s = text.replace(['×', 'X', '*'], "x");

    let stripped = match Regex::new(r"(?i)[whd]\s*") {
        Ok(re) => re.replace_all(&s, "").into_owned(),
        Err(_) => s.clone(),
    };

    let numbers = all_numbers(&stripped);
    if numbers.len() < 2 {
        return None;
    }

    let unit = if s.contains("cm") {
        "cm"
    } else if s.contains("mm") {
        "mm"
    } else if s.contains("ft") {
        "ft"
    } else if s.contains('"') || s.contains("inch") || s.contains("in ") {
        "inch"
    } else {
        "m"
    };

    let w = to_meters(&format!("{}{}", numbers[0], unit))?;
    let d = to_meters(&format!("{}{}", numbers[1], unit))?;
    Some((w, d))
}

/// Computes floor area in square meters, rounded to 4 decimals
pub fn area_m2(width_m: f64, depth_m: f64) -> f64 {
    round4(width_m * depth_m)
}

/// Scales a dimension by a margin ratio, rounded to 3 decimals
pub fn with_margin(value_m: f64, ratio: f64) -> f64 {
    round3(value_m * ratio)
}

fn first_number(s: &str) -> Option<f64> {
    all_numbers(s).into_iter().next()
}

fn all_numbers(s: &str) -> Vec<f64> {
    match Regex::new(r"[0-9]+(?:\.[0-9]+)?") {
        Ok(re) => re
            .find_iter(s)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}
