//! Product extraction module
//!
//! This module turns parsed product documents into raw field bags:
//! - per-field selector rules with explicit empty/zero defaults
//! - discounted-price recovery from the embedded state script

mod product;
mod special_price;

pub use product::{extract_product, RawProductFields};
pub use special_price::extract_special_price;
