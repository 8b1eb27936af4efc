//! Transport to the catalog provider
//!
//! Every call is described by its own [`CatalogRequest`]. Nothing about a
//! request outlives the call, so concurrent lookups never see each other's
//! URLs.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;

/// A single outbound request to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub method: Method,
    pub url: String,
    /// Diagnostic label attached to failures ("failed to get album with id ...")
    pub context: String,
}

impl CatalogRequest {
    pub fn get(url: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            context: context.into(),
        }
    }
}

/// Sends requests to the provider and returns the parsed JSON body.
///
/// Implementations return a status-coded [`CatalogError`](crate::error::CatalogError)
/// carrying the provider's message when the call does not succeed.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    async fn send(&self, request: &CatalogRequest) -> Result<serde_json::Value>;
}
