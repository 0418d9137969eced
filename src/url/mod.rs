//! URL handling module for FitGround
//!
//! This module provides the pure classification functions used by the
//! crawler: same-host membership, path-prefix admission, and product-link
//! pattern matching. All functions are deterministic and side-effect free
//! so they can be unit tested in isolation.

mod classify;
mod host;

pub use classify::{matches_pattern, path_allowed};
pub use host::{extract_host, same_host};
