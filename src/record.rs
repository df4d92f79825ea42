//! Final product record types
//!
//! Field names are a wire contract: records are persisted verbatim by the
//! sink, so the serialized layout must stay stable.

use serde::Serialize;
use serde_json::{Map, Value};

/// Pricing information for a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceData {
    /// Effective (possibly discounted) price
    pub current: f64,

    /// Non-discounted price
    pub original: f64,

    /// Human-readable discount label, empty when no discount applies
    pub sale_tag: String,
}

/// Stock information for a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stock {
    pub in_stock: bool,

    /// The source provides no quantity signal; always 0
    pub count: u32,
}

/// Media assets attached to a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assets {
    /// First gallery image, or empty string when the gallery is empty
    pub main_image: String,

    /// Gallery images followed by gallery thumbnails, absolute URLs,
    /// first-seen order, duplicates removed
    pub set_images: Vec<String>,

    /// 360-view frames, absolute URLs; duplicates are kept
    pub view360: Vec<String>,

    /// Video sources, absolute URLs
    pub video: Vec<String>,
}

/// A fully normalized product record, ready for the sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    /// Unix seconds, stamped at pipeline-finalization time
    pub timestamp: i64,

    /// The site's internal product reference code
    pub rpc: String,

    pub title: String,

    pub marketing_tags: Vec<String>,

    /// Breadcrumb path with the site root dropped
    pub section: Vec<String>,

    /// Explicit brand property, else second comma-separated token of the
    /// title, else empty
    pub brand: String,

    pub price_data: PriceData,

    pub stock: Stock,

    pub assets: Assets,

    /// Property rows in source order, plus the reserved `__description` key
    pub metadata: Map<String, Value>,

    /// Count of variant markers found on the page
    pub variants: usize,

    /// The fetched product page URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names_are_stable() {
        let record = ProductRecord {
            timestamp: 1_700_000_000,
            rpc: "P1234".to_string(),
            title: "Test".to_string(),
            marketing_tags: vec![],
            section: vec![],
            brand: String::new(),
            price_data: PriceData {
                current: 10.0,
                original: 10.0,
                sale_tag: String::new(),
            },
            stock: Stock {
                in_stock: true,
                count: 0,
            },
            assets: Assets {
                main_image: String::new(),
                set_images: vec![],
                view360: vec![],
                video: vec![],
            },
            metadata: Map::new(),
            variants: 0,
            url: "https://shop.example/catalog/p-1".to_string(),
        };

        let json: Value = serde_json::to_value(&record).unwrap();
        for key in [
            "timestamp",
            "rpc",
            "title",
            "marketing_tags",
            "section",
            "brand",
            "price_data",
            "stock",
            "assets",
            "metadata",
            "variants",
            "url",
        ] {
            assert!(json.get(key).is_some(), "missing field {}", key);
        }
        assert!(json["price_data"].get("sale_tag").is_some());
        assert!(json["stock"].get("in_stock").is_some());
        assert!(json["assets"].get("set_images").is_some());
    }

    #[test]
    fn test_metadata_preserves_insertion_order() {
        let mut metadata = Map::new();
        metadata.insert("__description".to_string(), Value::String("d".into()));
        metadata.insert("Бренд".to_string(), Value::String("Nike".into()));
        metadata.insert("Артикул".to_string(), Value::String("A1".into()));

        let keys: Vec<&String> = metadata.keys().collect();
        assert_eq!(keys, vec!["__description", "Бренд", "Артикул"]);
    }
}
