//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process:
//! - Seeding the frontier with category tasks
//! - Dispatching tasks to the category or product handler
//! - Handing finished records to the sink
//!
//! The loop is a cooperative, sequential dispatch: each fetch is an await
//! point, a category page's next-page task is only computed after that page
//! has been parsed, and the frontier's visited check-and-insert has a single
//! owner.

use crate::config::Config;
use crate::crawler::category::traverse_category;
use crate::crawler::fetcher::{build_http_client, fetch_document};
use crate::crawler::frontier::{CrawlContext, CrawlTask, Frontier, TaskKind};
use crate::output::{JsonLinesSink, RecordSink};
use crate::pipeline::finalize_now;
use crate::ScrapeError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    frontier: Frontier,
    client: Client,
    sink: Box<dyn RecordSink>,
    records_emitted: u64,
}

impl Coordinator {
    /// Creates a new coordinator, seeding the frontier with one category
    /// task per configured seed URL
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    /// * `sink` - Receiver for finished product records
    pub fn new(config: Config, sink: Box<dyn RecordSink>) -> Result<Self, ScrapeError> {
        let client = build_http_client(config.crawler.request_timeout_secs)?;

        let context = CrawlContext {
            region_id: config.site.region_id.clone(),
        };

        let mut frontier = Frontier::new();
        for seed in &config.site.seeds {
            let url = Url::parse(seed)?;
            frontier.submit(CrawlTask::category(url, context.clone()));
        }
        tracing::info!("Seeded frontier with {} category URLs", frontier.len());

        Ok(Self {
            config,
            frontier,
            client,
            sink,
            records_emitted: 0,
        })
    }

    /// Runs the main crawl loop until the frontier drains
    ///
    /// A task whose fetch fails is logged and dropped; it produces no
    /// downstream tasks and no record.
    pub async fn run(&mut self) -> Result<(), ScrapeError> {
        let start_time = std::time::Instant::now();
        let mut tasks_dispatched = 0u64;

        while let Some(task) = self.frontier.next() {
            tasks_dispatched += 1;
            tracing::debug!("Processing {:?} task: {}", task.kind, task.url);

            if let Err(e) = self.process_task(&task).await {
                tracing::warn!("Dropping task {}: {}", task.url, e);
            }

            if self.config.crawler.dispatch_delay_ms > 0 && !self.frontier.is_empty() {
                tokio::time::sleep(Duration::from_millis(self.config.crawler.dispatch_delay_ms))
                    .await;
            }
        }

        self.sink.flush()?;

        tracing::info!(
            "Crawl completed: {} tasks dispatched, {} records emitted in {:?}",
            tasks_dispatched,
            self.records_emitted,
            start_time.elapsed()
        );

        Ok(())
    }

    /// Returns the number of records handed to the sink so far
    pub fn records_emitted(&self) -> u64 {
        self.records_emitted
    }

    /// Fetches one task and dispatches it to the matching handler
    async fn process_task(&mut self, task: &CrawlTask) -> Result<(), ScrapeError> {
        let document = fetch_document(&self.client, &task.url, &task.context).await?;

        match task.kind {
            TaskKind::Category => {
                let outcome = traverse_category(&document, task, self.config.crawler.max_pages);
                tracing::info!(
                    "Category {} (page {}): {} product links",
                    task.url,
                    task.page_depth,
                    outcome.product_tasks.len()
                );
                for product_task in outcome.product_tasks {
                    self.frontier.submit(product_task);
                }
                if let Some(next_page) = outcome.next_page {
                    self.frontier.submit(next_page);
                }
            }

            TaskKind::Product => {
                let raw = crate::extract::extract_product(&document);
                let record = finalize_now(&raw, document.url());
                tracing::debug!("Extracted product '{}' from {}", record.title, record.url);
                self.sink.write(&record)?;
                self.records_emitted += 1;
            }
        }

        Ok(())
    }
}

/// Runs the main crawl operation
///
/// Opens the configured JSON-lines sink, seeds the frontier from the
/// configured category URLs, and drains it.
///
/// # Arguments
///
/// * `config` - The scraper configuration
pub async fn run_crawl(config: Config) -> Result<(), ScrapeError> {
    let sink = JsonLinesSink::create(Path::new(&config.output.records_path))?;
    let mut coordinator = Coordinator::new(config, Box::new(sink))?;
    coordinator.run().await
}
