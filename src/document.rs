//! Parsed-document accessor
//!
//! Wraps a parsed HTML document together with the URL it was fetched from
//! and exposes the narrow query surface the crawl and extraction code rely
//! on:
//! - ordered text contents for a CSS selector
//! - ordered attribute values for a CSS selector
//! - the body of the first script containing a marker substring
//! - relative-to-absolute URL resolution against the page URL
//!
//! A selector that fails to parse simply matches nothing; missing markup is
//! never an error at this layer.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A fetched page, parsed and ready for field queries
pub struct Document {
    html: Html,
    url: Url,
}

impl Document {
    /// Parses an HTML body fetched from `url`
    pub fn parse(body: &str, url: Url) -> Self {
        Self {
            html: Html::parse_document(body),
            url,
        }
    }

    /// The URL this document was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Collects the trimmed text of every element matching `selector`,
    /// in document order
    pub fn select_text_all(&self, selector: &str) -> Vec<String> {
        self.select_all(selector)
            .into_iter()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// The trimmed text of the first element matching `selector`,
    /// or an empty string
    pub fn select_first_text(&self, selector: &str) -> String {
        self.select_all(selector)
            .into_iter()
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Collects the value of `attr` for every element matching `selector`
    /// that carries it, in document order
    pub fn select_attr_all(&self, selector: &str, attr: &str) -> Vec<String> {
        self.select_all(selector)
            .into_iter()
            .filter_map(|el| el.value().attr(attr).map(str::to_string))
            .collect()
    }

    /// The value of `attr` on the first matching element that carries it
    pub fn select_first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.select_all(selector)
            .into_iter()
            .find_map(|el| el.value().attr(attr).map(str::to_string))
    }

    /// Returns the body of the first `<script>` whose content contains
    /// `needle`
    pub fn script_containing(&self, needle: &str) -> Option<String> {
        let selector = Selector::parse("script").ok()?;
        self.html
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .find(|body| body.contains(needle))
    }

    /// Resolves a possibly-relative URL against the page URL
    pub fn resolve(&self, relative: &str) -> Option<String> {
        self.url
            .join(relative.trim())
            .ok()
            .map(|resolved| resolved.to_string())
    }

    /// Raw element access for callers that need to walk structured blocks
    /// (for example key/value property rows)
    pub(crate) fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }
}
