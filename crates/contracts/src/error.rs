//! Layered error definitions
//!
//! Categorized by channel: synchronous precondition failures (raised before
//! any I/O) vs. asynchronous transport/server failures.

use serde::Deserialize;
use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ClientError {
    // ===== Precondition Errors (no I/O performed) =====
    /// Invalid request configuration
    #[error("invalid config at '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    /// Structured data supplied for the deprecated XML protocol configuration
    #[error("the xml protocol configuration is deprecated, use json_parameters to describe the protocol")]
    DeprecatedXmlConfig,

    /// Request body failed to serialize
    #[error("failed to encode request body: {message}")]
    Encode { message: String },

    // ===== Transport Errors =====
    /// Connection, timeout or body-decode failure
    #[error("http transport error: {message}")]
    Http { message: String },

    /// Non-2xx response, normalized
    #[error("server error: {0}")]
    Server(ErrorInfo),

    /// 2xx response whose body cannot be interpreted
    #[error("unexpected response: {message}")]
    UnexpectedResponse { message: String },

    /// The request handle was aborted before completion
    #[error("request aborted")]
    Aborted,
}

impl ClientError {
    /// Create invalid configuration error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create request-encode error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create http transport error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    /// Create unexpected response error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
        }
    }

    /// True for errors raised before any request was issued
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::DeprecatedXmlConfig | Self::Encode { .. }
        )
    }
}

/// Normalized server-error record
///
/// Callers never see a raw transport exception: failures carry at least a
/// message, plus the HTTP status and the server's exception class when the
/// error body provides them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorInfo {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, when the failure came from a response
    pub status: Option<u16>,
    /// Server-side exception class, when reported
    pub exception_class: Option<String>,
}

impl ErrorInfo {
    /// Build from an error response body
    ///
    /// Reads the server's `exception` message and `exceptionClass` fields,
    /// falling back to the status line when the body carries neither.
    pub fn from_body(status: u16, body: &serde_json::Value) -> Self {
        let message = body
            .get("exception")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {status}"));

        let exception_class = body
            .get("exceptionClass")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Self {
            message,
            status: Some(status),
            exception_class,
        }
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, ClientError>;
