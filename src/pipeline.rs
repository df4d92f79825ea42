//! Normalization pipeline
//!
//! Finalizes a raw field bag into a canonical product record: price
//! defaulting and the sale tag, the brand fallback chain, media URL
//! resolution with the asymmetric dedup policy, metadata assembly, and the
//! timestamp. The pipeline is the sole authority for the timestamp; the
//! caller injects the clock value, which keeps normalization idempotent and
//! testable.

use crate::extract::RawProductFields;
use crate::record::{Assets, PriceData, ProductRecord, Stock};
use serde_json::{Map, Value};
use url::Url;

/// Metadata key holding the schema.org description
const DESCRIPTION_KEY: &str = "__description";

/// Property label carrying the explicit brand
const BRAND_PROPERTY: &str = "Бренд";

/// Availability values end with this token when the product is in stock
const IN_STOCK_MARKER: &str = "InStock";

/// Finalizes a raw field bag into a product record
///
/// # Arguments
///
/// * `raw` - The extracted field bag
/// * `page_url` - The fetched product page URL, used to resolve media URLs
/// * `timestamp` - Unix seconds to stamp the record with
pub fn finalize(raw: &RawProductFields, page_url: &Url, timestamp: i64) -> ProductRecord {
    // original defaults to current, current defaults to original, both to 0
    let original = raw.price_original.unwrap_or_else(|| raw.price_current.unwrap_or(0.0));
    let current = raw.price_current.unwrap_or(original);

    let set_images = dedup_resolved(
        raw.gallery_images.iter().chain(raw.gallery_thumbs.iter()),
        page_url,
    );
    let main_image = set_images.first().cloned().unwrap_or_default();

    let metadata = build_metadata(raw);
    let brand = brand_of(&metadata, &raw.title);

    ProductRecord {
        timestamp,
        rpc: raw.rpc.clone(),
        title: raw.title.clone(),
        marketing_tags: raw.marketing_tags.clone(),
        section: raw.section.clone(),
        brand,
        price_data: PriceData {
            current,
            original,
            sale_tag: sale_tag(current, original),
        },
        stock: Stock {
            in_stock: raw
                .availability
                .as_deref()
                .is_some_and(|value| value.ends_with(IN_STOCK_MARKER)),
            count: 0,
        },
        assets: Assets {
            main_image,
            set_images,
            // view360 keeps duplicates, unlike set_images
            view360: resolve_all(&raw.view360, page_url),
            video: resolve_all(&raw.videos, page_url),
        },
        metadata,
        variants: raw.variants,
        url: page_url.to_string(),
    }
}

/// Finalizes a raw field bag, stamping it with the current time
pub fn finalize_now(raw: &RawProductFields, page_url: &Url) -> ProductRecord {
    finalize(raw, page_url, chrono::Utc::now().timestamp())
}

/// Formats the discount label, empty unless an actual discount applies
fn sale_tag(current: f64, original: f64) -> String {
    if original > 0.0 && current < original {
        // round-half-up for determinism across implementations
        let discount = ((original - current) / original * 100.0).round() as i64;
        format!("Скидка {}%", discount)
    } else {
        String::new()
    }
}

/// Explicit brand property when present and non-empty, else the second
/// comma-separated token of the title, else empty
fn brand_of(metadata: &Map<String, Value>, title: &str) -> String {
    if let Some(brand) = metadata.get(BRAND_PROPERTY).and_then(Value::as_str) {
        if !brand.is_empty() {
            return brand.to_string();
        }
    }

    let parts: Vec<&str> = title.split(',').map(str::trim).collect();
    if parts.len() > 1 {
        parts[1].to_string()
    } else {
        String::new()
    }
}

/// Assembles the metadata map: the reserved description key first, then one
/// entry per property row in source order. Empty keys are never inserted.
fn build_metadata(raw: &RawProductFields) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert(
        DESCRIPTION_KEY.to_string(),
        Value::String(raw.description.clone()),
    );
    for (key, value) in &raw.properties {
        if key.is_empty() {
            continue;
        }
        metadata.insert(key.clone(), Value::String(value.clone()));
    }
    metadata
}

/// Resolves each URL against the page URL, keeping first-seen order and
/// dropping empties and duplicates
fn dedup_resolved<'a>(raw_urls: impl Iterator<Item = &'a String>, page_url: &Url) -> Vec<String> {
    let mut resolved = Vec::new();
    for raw_url in raw_urls {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(absolute) = page_url.join(trimmed) {
            let absolute = absolute.to_string();
            if !resolved.contains(&absolute) {
                resolved.push(absolute);
            }
        }
    }
    resolved
}

/// Resolves each URL against the page URL, dropping empties but keeping
/// duplicates
fn resolve_all(raw_urls: &[String], page_url: &Url) -> Vec<String> {
    raw_urls
        .iter()
        .map(|raw_url| raw_url.trim())
        .filter(|raw_url| !raw_url.is_empty())
        .filter_map(|raw_url| page_url.join(raw_url).ok())
        .map(|absolute| absolute.to_string())
        .collect()
}
