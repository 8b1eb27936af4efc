//! Configuration module for the catalog proxy
//!
//! Provider settings come from an optional config file layered under
//! `MUSIC_*` environment variables. Server settings come from the command line.

mod catalog_config;

pub use catalog_config::{CapGranularity, CatalogConfig, LogRotation};

/// Prefix for environment overrides (`MUSIC_HOST`, `MUSIC_API_KEY`, ...)
pub const ENV_PREFIX: &str = "MUSIC";

/// Default records per search page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default cap on search results
pub const DEFAULT_MAX_RESULTS: usize = 100;
