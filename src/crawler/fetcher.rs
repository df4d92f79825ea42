//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with proper user agent and timeouts
//! - GET requests with the region cookie attached
//! - Turning successful responses into parsed documents
//!
//! A failed fetch surfaces as an error to the coordinator, which drops the
//! task; no partial work flows downstream.

use crate::crawler::frontier::CrawlContext;
use crate::document::Document;
use crate::ScrapeError;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `request_timeout_secs` - Per-request timeout in seconds
pub fn build_http_client(request_timeout_secs: u64) -> Result<Client, reqwest::Error> {
    let user_agent = format!("fixprice-scraper/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with the task's region cookie and parses the body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `context` - Per-task context providing the region cookie value
///
/// # Returns
///
/// * `Ok(Document)` - Parsed document, carrying the final URL after redirects
/// * `Err(ScrapeError)` - Network failure or non-success status
pub async fn fetch_document(
    client: &Client,
    url: &Url,
    context: &CrawlContext,
) -> Result<Document, ScrapeError> {
    let response = client
        .get(url.clone())
        .header(header::COOKIE, format!("region_id={}", context.region_id))
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(Document::parse(&body, final_url))
}
