//! Product page extraction
//!
//! Turns a parsed product document into a raw field bag. Every rule has an
//! explicit empty/zero default: a missing block, attribute, or script
//! payload degrades the corresponding field and never fails the task.

use crate::document::Document;
use crate::extract::special_price::extract_special_price;
use scraper::{ElementRef, Selector};

const PRODUCT_SCOPE: &str = r#"div[itemtype="http://schema.org/Product"]"#;
const BREADCRUMB_NAMES: &str =
    r#"div[itemtype="http://schema.org/BreadcrumbList"] span[itemprop="name"]"#;
const OFFER_PRICE: &str = r#"div[itemprop="offers"] meta[itemprop="price"]"#;
const OFFER_AVAILABILITY: &str = r#"div[itemprop="offers"] meta[itemprop="availability"]"#;

/// Raw fields pulled from a product page, before normalization
///
/// URL lists are unresolved and may contain duplicates and empties; the
/// normalization pipeline resolves and filters them.
#[derive(Debug, Clone, Default)]
pub struct RawProductFields {
    pub rpc: String,
    pub title: String,
    pub marketing_tags: Vec<String>,

    /// Breadcrumb path, root crumb dropped, empties filtered
    pub section: Vec<String>,

    /// Non-discounted price from the offer meta
    pub price_original: Option<f64>,

    /// Discounted price recovered from the embedded state script
    pub price_current: Option<f64>,

    /// Raw availability value from the offer meta
    pub availability: Option<String>,

    pub gallery_images: Vec<String>,
    pub gallery_thumbs: Vec<String>,
    pub view360: Vec<String>,
    pub videos: Vec<String>,

    pub description: String,

    /// Property rows in source order: (label, value text)
    pub properties: Vec<(String, String)>,

    /// Raw occurrence count of variant markers
    pub variants: usize,
}

/// Extracts the raw field bag from a product document
pub fn extract_product(document: &Document) -> RawProductFields {
    RawProductFields {
        rpc: document.select_first_text("div.additional-information span.value"),
        title: document.select_first_text(&format!("{} h1.title", PRODUCT_SCOPE)),
        marketing_tags: document.select_text_all("div.sticker span"),
        section: extract_section(document),
        price_original: document
            .select_first_attr(OFFER_PRICE, "content")
            .and_then(|content| content.parse::<f64>().ok()),
        price_current: extract_special_price(document),
        availability: document.select_first_attr(OFFER_AVAILABILITY, "content"),
        gallery_images: image_sources(document, "div.gallery img"),
        gallery_thumbs: image_sources(document, "div.gallery-thumbs img"),
        view360: image_sources(document, "div.view360 img"),
        videos: document.select_attr_all("video source", "src"),
        description: document
            .select_first_attr(
                &format!(r#"{} meta[itemprop="description"]"#, PRODUCT_SCOPE),
                "content",
            )
            .map(|content| content.trim().to_string())
            .unwrap_or_default(),
        properties: extract_properties(document),
        variants: document
            .select_all("ul.product-variants li[data-variant]")
            .len(),
    }
}

/// Breadcrumb path with the site root dropped and empty crumbs filtered
fn extract_section(document: &Document) -> Vec<String> {
    document
        .select_text_all(BREADCRUMB_NAMES)
        .into_iter()
        .skip(1)
        .map(|crumb| crumb.trim().to_string())
        .filter(|crumb| !crumb.is_empty())
        .collect()
}

/// Collects `src` and lazy `data-src` values for every element matching
/// `selector`, in document order
fn image_sources(document: &Document, selector: &str) -> Vec<String> {
    let mut sources = Vec::new();
    for element in document.select_all(selector) {
        for attr in ["src", "data-src"] {
            if let Some(value) = element.value().attr(attr) {
                sources.push(value.to_string());
            }
        }
    }
    sources
}

/// Property rows from the details block
///
/// Key = trimmed label with trailing colons stripped. Value = concatenated
/// text of the value slot's child elements, falling back to the slot's own
/// text nodes when that is empty.
fn extract_properties(document: &Document) -> Vec<(String, String)> {
    let (Ok(title_sel), Ok(value_sel)) = (
        Selector::parse("span.title"),
        Selector::parse("span.value"),
    ) else {
        return Vec::new();
    };

    let mut properties = Vec::new();
    for row in document.select_all("div.properties-block p.property") {
        let key = row
            .select(&title_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
            .trim()
            .trim_end_matches(':')
            .to_string();

        let value = row
            .select(&value_sel)
            .next()
            .map(value_text)
            .unwrap_or_default();

        properties.push((key, value));
    }
    properties
}

/// Text of a value slot: nested element text first, direct text as fallback
fn value_text(value_el: ElementRef) -> String {
    let nested: String = value_el
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| child.text().collect::<String>())
        .collect();
    let nested = nested.trim();
    if !nested.is_empty() {
        return nested.to_string();
    }

    value_el
        .children()
        .filter_map(|node| node.value().as_text().map(|text| text.to_string()))
        .collect::<String>()
        .trim()
        .to_string()
}
