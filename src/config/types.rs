use serde::Deserialize;

/// Main configuration structure for the scraper
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Category pagination bound: listing pages 1..=max_pages are visited
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Politeness delay between frontier dispatches (milliseconds);
    /// 0 disables the delay
    #[serde(rename = "dispatch-delay-ms", default)]
    pub dispatch_delay_ms: u64,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Region cookie value threaded into every fetch
    #[serde(rename = "region-id", default = "default_region_id")]
    pub region_id: String,

    /// Seed category listing URLs
    pub seeds: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON-lines records file
    #[serde(rename = "records-path")]
    pub records_path: String,
}

fn default_max_pages() -> u32 {
    crate::crawler::MAX_PAGES
}

fn default_request_timeout() -> u64 {
    30
}

fn default_region_id() -> String {
    "512".to_string()
}
