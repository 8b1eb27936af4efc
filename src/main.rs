//! catalog-proxy - a thin backend over a third-party music catalog API
//!
//! Searches tracks and artists on the provider, resolves the albums, genres
//! and images they reference, and hands back simplified models.

mod api;
mod client;
mod config;
mod core;
mod error;
mod logging;
mod models;
mod serializers;
mod utils;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::client::HttpTransport;
use crate::config::CatalogConfig;
use crate::core::CatalogService;

/// catalog-proxy - music catalog API proxy
#[derive(Parser, Debug)]
#[command(name = "catalog-proxy")]
#[command(version)]
#[command(about = "A thin backend that proxies a music catalog API")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Path to a config file (toml, json or yaml); MUSIC_* environment variables override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let catalog_config = CatalogConfig::load(args.config.as_deref())?;

    let directive = if args.debug {
        "debug"
    } else {
        catalog_config.log_level.as_str()
    };
    let (log_level, _log_guard) = logging::init(directive, &catalog_config)?;

    info!("catalog-proxy v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "Catalog provider: {}{}",
        catalog_config.host, catalog_config.base_path
    );

    if catalog_config.log_to_file {
        info!(
            "Writing logs to {}/{}",
            catalog_config.log_file_dir, catalog_config.log_file_name
        );
    }

    if catalog_config.api_key.is_empty() {
        warn!("No API key configured. Set MUSIC_API_KEY or the api_key config entry.");
    }

    start_server(args.host, args.port, catalog_config, log_level).await
}

async fn start_server(
    host: String,
    port: u16,
    catalog_config: CatalogConfig,
    log_level: logging::LogLevel,
) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let timeout = Duration::from_secs(catalog_config.request_timeout_secs);
    let transport = HttpTransport::new(timeout).context("Failed to create catalog transport")?;

    let service = web::Data::new(CatalogService::new(Arc::new(transport), catalog_config));
    let log_level = web::Data::new(log_level);

    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .app_data(service.clone())
            .app_data(log_level.clone())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
