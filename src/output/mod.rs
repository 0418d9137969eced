//! Output module for snapshots and discovery artifacts
//!
//! This module writes the two kinds of run output:
//! - Per-brand discovered-URL JSON artifacts
//! - Tabular CSV snapshots (timestamped plus `latest.csv`)

mod csv;
mod discovered;

pub use csv::{render_csv, write_snapshots};
pub use discovered::write_discovered_urls;
