use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-pages = 5
dispatch-delay-ms = 250
request-timeout-secs = 20

[site]
region-id = "512"
seeds = [
    "https://shop.example/catalog/food",
    "https://shop.example/catalog/toys",
]

[output]
records-path = "./records.jsonl"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 5);
        assert_eq!(config.crawler.dispatch_delay_ms, 250);
        assert_eq!(config.crawler.request_timeout_secs, 20);
        assert_eq!(config.site.region_id, "512");
        assert_eq!(config.site.seeds.len(), 2);
        assert_eq!(config.output.records_path, "./records.jsonl");
    }

    #[test]
    fn test_defaults_applied() {
        let config_content = r#"
[crawler]

[site]
seeds = ["https://shop.example/catalog/food"]

[output]
records-path = "./records.jsonl"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 3);
        assert_eq!(config.crawler.dispatch_delay_ms, 0);
        assert_eq!(config.crawler.request_timeout_secs, 30);
        assert_eq!(config.site.region_id, "512");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]

[site]
seeds = []

[output]
records-path = "./records.jsonl"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
