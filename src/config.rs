// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{DetectorError, Result};
use crate::similarity::{DEFAULT_SHINGLE_SIZE, DEFAULT_THRESHOLD, EXCERPT_CHARS};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub detection: DetectionConfig,
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    pub shingle_size: usize,
    pub threshold: f64,
    pub excerpt_chars: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub cse_id: Option<String>,
    pub num_results: usize,
    pub max_query_chars: usize,
    #[serde(default)]
    pub excluded_domains: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub concurrency: usize,
    pub max_body_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

/// Google Custom Search rejects `num` above this value.
pub const MAX_SEARCH_RESULTS: usize = 10;

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PLAGISCAN")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| DetectorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| DetectorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            detection: DetectionConfig {
                shingle_size: DEFAULT_SHINGLE_SIZE,
                threshold: DEFAULT_THRESHOLD,
                excerpt_chars: EXCERPT_CHARS,
            },
            search: SearchConfig {
                endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
                api_key: None,
                cse_id: None,
                num_results: 7,
                max_query_chars: 300,
                excluded_domains: vec!["youtube.com".to_string()],
            },
            fetch: FetchConfig {
                timeout_secs: 5,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36"
                    .to_string(),
                concurrency: 4,
                max_body_mb: 5,
            },
            scan: ScanConfig {
                extensions: vec![
                    "txt".to_string(),
                    "md".to_string(),
                    "markdown".to_string(),
                    "html".to_string(),
                    "htm".to_string(),
                ],
                skip_patterns: vec![".git/".to_string(), "target/".to_string()],
                max_file_size_mb: 10,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.detection.shingle_size == 0 {
            return Err(DetectorError::Config(
                "shingle_size must be greater than 0".to_string(),
            ));
        }

        if !self.detection.threshold.is_finite()
            || !(0.0..=1.0).contains(&self.detection.threshold)
        {
            return Err(DetectorError::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.detection.threshold
            )));
        }

        if self.search.num_results == 0 || self.search.num_results > MAX_SEARCH_RESULTS {
            return Err(DetectorError::Config(format!(
                "num_results must be between 1 and {}",
                MAX_SEARCH_RESULTS
            )));
        }

        Validator::validate_url(&self.search.endpoint)
            .map_err(|e| DetectorError::Config(e.to_string()))?;

        if self.fetch.concurrency == 0 {
            return Err(DetectorError::Config(
                "concurrency must be greater than 0".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(DetectorError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.detection.shingle_size, 7);
        assert_eq!(config.detection.threshold, 0.02);
    }

    #[test]
    fn test_validate_rejects_zero_shingle_size() {
        let mut config = Config::default_config();
        config.detection.shingle_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = Config::default_config();
        config.detection.threshold = 1.5;
        assert!(config.validate().is_err());

        config.detection.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_results() {
        let mut config = Config::default_config();
        config.search.num_results = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plagiscan.toml");
        let serialized = sample_toml();
        fs::write(&path, serialized).unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.detection.shingle_size, 5);
        assert_eq!(config.fetch.concurrency, 2);
    }

    fn sample_toml() -> String {
        r#"
[detection]
shingle_size = 5
threshold = 0.1
excerpt_chars = 200

[search]
endpoint = "https://www.googleapis.com/customsearch/v1"
num_results = 5
max_query_chars = 300
excluded_domains = ["youtube.com"]

[fetch]
timeout_secs = 5
user_agent = "plagiscan-test"
concurrency = 2
max_body_mb = 5

[scan]
extensions = ["txt"]
max_file_size_mb = 1
"#
        .to_string()
    }
}
