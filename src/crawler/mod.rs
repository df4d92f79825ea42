//! Crawler module for catalog traversal and task dispatch
//!
//! This module contains the core crawling logic:
//! - The URL frontier (pending tasks, visited tracking, pagination bound)
//! - Category listing traversal
//! - HTTP fetching with the region cookie
//! - Overall crawl coordination

mod category;
mod coordinator;
mod fetcher;
mod frontier;

pub use category::{is_product_link, traverse_category, CategoryOutcome};
pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_document};
pub use frontier::{page_depth_from_url, CrawlContext, CrawlTask, Frontier, TaskKind, MAX_PAGES};

use crate::config::Config;
use crate::ScrapeError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the record sink
/// 2. Seed the frontier with the configured category URLs
/// 3. Fetch category pages, discovering product links and next pages
/// 4. Fetch product pages, extracting and normalizing records
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(())` - Crawl completed successfully
/// * `Err(ScrapeError)` - Crawl failed
pub async fn crawl(config: Config) -> Result<(), ScrapeError> {
    run_crawl(config).await
}
