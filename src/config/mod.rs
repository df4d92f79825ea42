//! Configuration module
//!
//! Loads and validates the TOML configuration: crawler behavior, the target
//! site's region and seed category URLs, and the output destination.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig};
pub use validation::validate;
