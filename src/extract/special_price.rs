//! Discounted-price recovery from the embedded state script
//!
//! The schema.org offer meta only carries the non-discounted price. When a
//! discount is active, the effective price exists solely inside the
//! `window.__NUXT__` application-state blob, string-encoded. This module
//! isolates the matching rule so it can be swapped without touching the
//! rest of the pipeline when the site's state serialization changes.

use crate::document::Document;
use regex::Regex;

/// Substring identifying the application-state script block
const STATE_MARKER: &str = "window.__NUXT__";

/// Matches the string-encoded integer price of a `specialPrice` object
const SPECIAL_PRICE_PATTERN: &str = r#"specialPrice\s*:\s*\{[^}]*price:"(\d+)""#;

/// Scans the embedded state script for the special-price value
///
/// Returns `None` when the script block, the `specialPrice` object, or its
/// price field is absent.
pub fn extract_special_price(document: &Document) -> Option<f64> {
    let script = document.script_containing(STATE_MARKER)?;
    extract_from_payload(&script)
}

fn extract_from_payload(payload: &str) -> Option<f64> {
    let pattern = Regex::new(SPECIAL_PRICE_PATTERN).ok()?;
    pattern
        .captures(payload)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
}
