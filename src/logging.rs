//! Logging setup
//!
//! The filter sits behind a reload layer so the level can be changed while
//! the server is running (see `GET /admin/logging/{level}`). Output always
//! goes to stdout; with `log_to_file` set it is also written to a rolling
//! file in `log_file_dir`.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::config::{CatalogConfig, LogRotation};

/// Filters for chatty dependencies, appended to every directive
const DEPENDENCY_FILTERS: &str = "hyper=warn,reqwest=warn,actix_server=info";

const DEFAULT_LOG_FILE_PREFIX: &str = "catalog-proxy";

/// Handle for changing the active log level
pub struct LogLevel {
    handle: reload::Handle<EnvFilter, Registry>,
    /// Configured level, applied when an unknown level is requested
    fallback: String,
}

impl LogLevel {
    pub fn new(handle: reload::Handle<EnvFilter, Registry>, fallback: impl Into<String>) -> Self {
        Self {
            handle,
            fallback: fallback.into(),
        }
    }

    /// Switch to the named level and return the level actually applied.
    ///
    /// Unknown names fall back to the configured level.
    pub fn set(&self, requested: &str) -> Result<String> {
        let requested = requested.trim().to_lowercase();

        let (applied, directive) = match parse_level(&requested) {
            Some(level) => (requested, level.to_string().to_lowercase()),
            None => {
                tracing::warn!(
                    "unknown log level '{}', using configured level '{}'",
                    requested,
                    self.fallback
                );
                (self.fallback.clone(), self.fallback.clone())
            }
        };

        let filter = build_filter(&directive)?;
        self.handle
            .reload(filter)
            .context("Failed to reload log filter")?;
        Ok(applied)
    }
}

/// Level names accepted at runtime. `all` and `fatal` are kept as aliases.
fn parse_level(name: &str) -> Option<LevelFilter> {
    match name {
        "all" => Some(LevelFilter::TRACE),
        "fatal" => Some(LevelFilter::ERROR),
        "trace" | "debug" | "info" | "warn" | "error" | "off" => name.parse().ok(),
        _ => None,
    }
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!("{},{}", directive, DEPENDENCY_FILTERS))
        .with_context(|| format!("Invalid log level: {}", directive))
}

fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// Rolling appender for `log_file_dir/log_file_name`, keeping `log_backups`
/// rotated files next to the active one
fn file_appender(config: &CatalogConfig) -> Result<RollingFileAppender> {
    let name = Path::new(&config.log_file_name);
    let prefix = name
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_PREFIX);

    let mut builder = RollingFileAppender::builder()
        .rotation(rotation(config.log_rotation))
        .filename_prefix(prefix)
        .max_log_files(config.log_backups + 1);

    if let Some(extension) = name.extension().and_then(|ext| ext.to_str()) {
        builder = builder.filename_suffix(extension);
    }

    builder
        .build(&config.log_file_dir)
        .with_context(|| format!("Failed to open log directory {}", config.log_file_dir))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped and must be held
/// for as long as the process logs.
pub fn init(directive: &str, config: &CatalogConfig) -> Result<(LogLevel, Option<WorkerGuard>)> {
    let (filter, handle) = reload::Layer::new(build_filter(directive)?);

    let (file_layer, guard) = if config.log_to_file {
        let (writer, guard) = tracing_appender::non_blocking(file_appender(config)?);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .compact();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok((LogLevel::new(handle, config.log_level.clone()), guard))
}
