//! URL frontier for pending crawl tasks
//!
//! The frontier owns all crawl-run state: the FIFO queue of pending tasks
//! and the set of already dispatched category URLs. It is created per crawl
//! run and discarded at run end; nothing here is global.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Default category pagination bound: no next-page task is emitted at or
/// beyond this depth unless `[crawler] max-pages` overrides it
pub const MAX_PAGES: u32 = 3;

/// What a crawl task targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// A paginated listing page
    Category,

    /// A single item's detail page
    Product,
}

/// Per-task request context, threaded into every fetch
#[derive(Debug, Clone)]
pub struct CrawlContext {
    /// Region cookie value selecting the store region
    pub region_id: String,
}

/// A single unit of crawl work; never mutated after creation
#[derive(Debug, Clone)]
pub struct CrawlTask {
    pub url: Url,
    pub kind: TaskKind,

    /// 1-based page number, meaningful for category tasks only
    pub page_depth: u32,

    pub context: CrawlContext,
}

impl CrawlTask {
    /// Creates a category task, deriving its page depth from the URL
    pub fn category(url: Url, context: CrawlContext) -> Self {
        let page_depth = page_depth_from_url(&url);
        Self {
            url,
            kind: TaskKind::Category,
            page_depth,
            context,
        }
    }

    /// Creates a product task
    pub fn product(url: Url, context: CrawlContext) -> Self {
        Self {
            url,
            kind: TaskKind::Product,
            page_depth: 1,
            context,
        }
    }
}

/// Derives the 1-based page number from the `page=` query parameter
///
/// Everything after the last `page=` must parse as an integer; a missing
/// parameter or a non-numeric suffix is treated as page 1, not an error.
pub fn page_depth_from_url(url: &Url) -> u32 {
    let raw = url.as_str();
    if !raw.contains("page=") {
        return 1;
    }
    raw.rsplit("page=")
        .next()
        .and_then(|tail| tail.parse::<u32>().ok())
        .unwrap_or(1)
}

/// FIFO queue of pending crawl tasks plus visited-URL tracking
pub struct Frontier {
    queue: VecDeque<CrawlTask>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    /// Enqueues a task
    ///
    /// Category URLs are checked against and inserted into the visited set
    /// in the same call, so each category URL is dispatched at most once per
    /// run. Product tasks are never deduplicated: multiple category branches
    /// may legitimately point at the same product.
    ///
    /// Returns whether the task was accepted.
    pub fn submit(&mut self, task: CrawlTask) -> bool {
        if task.kind == TaskKind::Category && !self.visited.insert(task.url.as_str().to_string())
        {
            tracing::debug!("Skipping already visited category URL: {}", task.url);
            return false;
        }
        self.queue.push_back(task);
        true
    }

    /// Dequeues the next task in arrival order
    pub fn next(&mut self) -> Option<CrawlTask> {
        self.queue.pop_front()
    }

    /// Returns the number of pending tasks
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the frontier has no pending tasks
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> CrawlContext {
        CrawlContext {
            region_id: "512".to_string(),
        }
    }

    fn category(url: &str) -> CrawlTask {
        CrawlTask::category(Url::parse(url).unwrap(), context())
    }

    fn product(url: &str) -> CrawlTask {
        CrawlTask::product(Url::parse(url).unwrap(), context())
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.submit(category("https://shop.example/catalog/food"));
        frontier.submit(product("https://shop.example/catalog/food/p-1"));
        frontier.submit(product("https://shop.example/catalog/food/p-2"));

        assert_eq!(frontier.next().unwrap().kind, TaskKind::Category);
        assert_eq!(
            frontier.next().unwrap().url.as_str(),
            "https://shop.example/catalog/food/p-1"
        );
        assert_eq!(
            frontier.next().unwrap().url.as_str(),
            "https://shop.example/catalog/food/p-2"
        );
        assert!(frontier.next().is_none());
    }

    #[test]
    fn test_category_urls_dispatched_at_most_once() {
        let mut frontier = Frontier::new();
        assert!(frontier.submit(category("https://shop.example/catalog/food")));
        assert!(!frontier.submit(category("https://shop.example/catalog/food")));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_product_tasks_are_not_deduplicated() {
        let mut frontier = Frontier::new();
        assert!(frontier.submit(product("https://shop.example/catalog/food/p-1")));
        assert!(frontier.submit(product("https://shop.example/catalog/food/p-1")));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_page_depth_defaults_to_one() {
        let url = Url::parse("https://shop.example/catalog/food").unwrap();
        assert_eq!(page_depth_from_url(&url), 1);
    }

    #[test]
    fn test_page_depth_from_query_parameter() {
        let url = Url::parse("https://shop.example/catalog/food?page=2").unwrap();
        assert_eq!(page_depth_from_url(&url), 2);
    }

    #[test]
    fn test_malformed_page_number_is_page_one() {
        let url = Url::parse("https://shop.example/catalog/food?page=abc").unwrap();
        assert_eq!(page_depth_from_url(&url), 1);

        // Trailing parameters make the suffix non-numeric
        let url = Url::parse("https://shop.example/catalog/food?page=2&sort=asc").unwrap();
        assert_eq!(page_depth_from_url(&url), 1);
    }

    #[test]
    fn test_page_depth_uses_last_occurrence() {
        let url = Url::parse("https://shop.example/catalog/food?page=2&page=3").unwrap();
        assert_eq!(page_depth_from_url(&url), 3);
    }

    #[test]
    fn test_category_task_derives_depth() {
        let task = category("https://shop.example/catalog/food?page=3");
        assert_eq!(task.page_depth, 3);
    }
}
