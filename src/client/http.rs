//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::{CatalogRequest, CatalogTransport};
use crate::error::{CatalogError, Result};

/// Transport that talks to the real provider over HTTP
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::upstream(format!("failed to build http client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn send(&self, request: &CatalogRequest) -> Result<serde_json::Value> {
        tracing::debug!("{} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method.clone(), &request.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Upstream {
                status: e.status().map(|s| s.as_u16()).unwrap_or(500),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::from_status(
                status.as_u16(),
                provider_message(&body, status),
            ));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| CatalogError::upstream(format!("invalid response body: {}", e)))
    }
}

/// Pull the provider's error message out of a failed response body.
///
/// The provider usually answers `{"code": "...", "message": "..."}`; some
/// gateways answer `{"error": "..."}` or plain text.
fn provider_message(body: &str, status: StatusCode) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let message = json
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| json.get("error").and_then(|e| e.as_str()))
            .or_else(|| json["error"]["message"].as_str());
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
