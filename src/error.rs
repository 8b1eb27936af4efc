//! Error types for catalog lookups.
//!
//! Provider failures keep their status code and message all the way up to
//! the HTTP response. Callers may wrap an error with a context label for
//! diagnostics; the label never replaces the provider's status or message.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failure of a call to the catalog provider.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Provider returned no matching entity (usually 404)
    #[error("{message}")]
    NotFound { message: String },

    /// Provider rejected the credentials (usually 401)
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response or transport-level failure
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// An error with a caller-supplied label attached
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CatalogError>,
    },
}

impl CatalogError {
    /// Build an error from a provider status code and message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => Self::NotFound { message },
            401 => Self::Unauthorized { message },
            _ => Self::Upstream { status, message },
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an upstream error with the default 500 status.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: 500,
            message: message.into(),
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Status code of the innermost failure.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Unauthorized { .. } => 401,
            Self::Upstream { status, .. } => *status,
            Self::WithContext { source, .. } => source.status(),
        }
    }

    /// Provider message of the innermost failure, without any context labels.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Unauthorized { message }
            | Self::Upstream { message, .. } => message,
            Self::WithContext { source, .. } => source.message(),
        }
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.message(),
            "status": self.status(),
        }))
    }
}
