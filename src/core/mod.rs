//! Core catalog library: resolvers and the search pipeline

pub mod artistlib;
pub mod resolvers;
pub mod search;

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::client::{CatalogRequest, CatalogTransport};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::utils::build_url;

/// Entry point for every catalog operation.
///
/// Holds the transport and configuration it was built with; there is no
/// other state, so one instance can serve any number of concurrent calls.
pub struct CatalogService {
    transport: Arc<dyn CatalogTransport>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(transport: Arc<dyn CatalogTransport>, config: CatalogConfig) -> Self {
        Self { transport, config }
    }

    /// `{host}{base}{resource}{id}?apikey={key}`
    fn entity_url(&self, resource: &str, id: &str) -> String {
        build_url(&[
            &self.config.host,
            &self.config.base_path,
            resource,
            id,
            &self.config.api_key_query(),
        ])
    }

    /// Send a GET and decode the body into `T`.
    ///
    /// Failures are logged and labelled with `context`; the provider's
    /// status and message are kept as they are.
    async fn fetch<T: DeserializeOwned>(&self, url: String, context: String) -> Result<T> {
        let request = CatalogRequest::get(url, context);

        let body = match self.transport.send(&request).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("{}: {}", request.context, e.message());
                return Err(e.context(request.context));
            }
        };

        serde_json::from_value(body).map_err(|e| {
            tracing::error!("{}: unexpected response shape: {}", request.context, e);
            CatalogError::upstream(format!("unexpected response shape: {}", e))
                .context(request.context)
        })
    }
}

/// A lookup that succeeded but matched nothing, logged like a provider failure
fn missing(context: String, message: String) -> CatalogError {
    tracing::error!("{}: {}", context, message);
    CatalogError::not_found(message).context(context)
}
