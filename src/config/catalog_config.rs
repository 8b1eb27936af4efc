//! Catalog provider configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE, ENV_PREFIX};

/// How the result cap is applied to paginated searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapGranularity {
    /// Keep at most `max_results` page batches (legacy behavior)
    Batch,
    /// Keep at most `max_results` records
    #[default]
    Record,
}

/// How often the log file is rolled over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Settings for talking to the catalog provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Provider host, including scheme
    pub host: String,

    /// API version prefix
    pub base_path: String,

    /// Resource paths, each with leading and trailing slash
    pub tracks_url: String,
    pub artists_url: String,
    pub albums_url: String,
    pub genres_url: String,

    /// API key appended to every request
    pub api_key: String,

    /// Records the provider returns per search request
    pub page_size: usize,

    /// Upper bound on search results handed back to clients
    pub max_results: usize,

    /// Whether `max_results` counts batches or records
    pub cap_granularity: CapGranularity,

    /// Timeout for a single provider request, in seconds
    pub request_timeout_secs: u64,

    /// Initial tracing filter directive, also the fallback for unknown runtime levels
    pub log_level: String,

    /// Also write logs to a file
    pub log_to_file: bool,
    pub log_file_dir: String,
    pub log_file_name: String,
    pub log_rotation: LogRotation,

    /// Rotated log files kept besides the active one
    pub log_backups: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: "https://api.napster.com".to_string(),
            base_path: "/v2.2".to_string(),
            tracks_url: "/tracks/".to_string(),
            artists_url: "/artists/".to_string(),
            albums_url: "/albums/".to_string(),
            genres_url: "/genres/".to_string(),
            api_key: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
            cap_granularity: CapGranularity::default(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            log_to_file: false,
            log_file_dir: "./logs".to_string(),
            log_file_name: "catalog-proxy.log".to_string(),
            log_rotation: LogRotation::default(),
            log_backups: 10,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from an optional file, then `MUSIC_*` environment variables
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: CatalogConfig = builder
            .build()
            .context("Failed to read catalog configuration")?
            .try_deserialize()
            .context("Failed to parse catalog configuration")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be greater than zero");
        }
        if self.max_results == 0 {
            anyhow::bail!("max_results must be greater than zero");
        }
        if self.log_to_file && self.log_file_name.trim().is_empty() {
            anyhow::bail!("log_file_name must be set when log_to_file is enabled");
        }
        Ok(())
    }

    /// Query string fragment carrying the API key
    pub fn api_key_query(&self) -> String {
        format!("?apikey={}", self.api_key)
    }
}
