//! Category listing traversal
//!
//! Given a parsed category page, this module finds product links and
//! computes the next-page task. A page with zero qualifying links still
//! paginates while under the page bound; traversal never stops on an empty
//! link list.

use crate::crawler::frontier::CrawlTask;
use crate::document::Document;
use url::Url;

/// Path marker every catalog link carries
const CATALOG_MARKER: &str = "/catalog/";

/// Path marker identifying a product detail page
const PRODUCT_ID_MARKER: &str = "/p-";

/// Tasks produced by traversing one category page
pub struct CategoryOutcome {
    /// One product task per qualifying anchor, in document order
    pub product_tasks: Vec<CrawlTask>,

    /// The next listing page, when under the page bound
    pub next_page: Option<CrawlTask>,
}

/// Returns whether an anchor target points at a product detail page
pub fn is_product_link(href: &str) -> bool {
    href.contains(CATALOG_MARKER) && href.contains(PRODUCT_ID_MARKER)
}

/// Traverses a category document, emitting product tasks and at most one
/// next-page task
///
/// Product tasks inherit the category task's context. The next-page URL is
/// the current URL stripped of its query string with `?page=<depth+1>`
/// appended; it is emitted only while `page_depth < max_pages`.
pub fn traverse_category(document: &Document, task: &CrawlTask, max_pages: u32) -> CategoryOutcome {
    let mut product_tasks = Vec::new();

    for href in document.select_attr_all("a", "href") {
        if !is_product_link(&href) {
            continue;
        }
        let Some(absolute) = document.resolve(&href) else {
            tracing::debug!("Failed to resolve product link {}", href);
            continue;
        };
        match Url::parse(&absolute) {
            Ok(url) => product_tasks.push(CrawlTask::product(url, task.context.clone())),
            Err(e) => tracing::debug!("Discarding unparsable product link {}: {}", absolute, e),
        }
    }

    CategoryOutcome {
        product_tasks,
        next_page: next_page_task(task, max_pages),
    }
}

/// Computes the next-page task for a category task, or None at the bound
fn next_page_task(task: &CrawlTask, max_pages: u32) -> Option<CrawlTask> {
    if task.page_depth >= max_pages {
        return None;
    }

    let current = task.url.as_str();
    let base = current.split('?').next().unwrap_or(current);
    let next = format!("{}?page={}", base, task.page_depth + 1);

    match Url::parse(&next) {
        Ok(url) => Some(CrawlTask::category(url, task.context.clone())),
        Err(e) => {
            tracing::warn!("Failed to build next-page URL from {}: {}", current, e);
            None
        }
    }
}
