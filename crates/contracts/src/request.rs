//! Wire request value type
//!
//! An [`ApiRequest`] is built once per operation and consumed once by the
//! transport; it is never mutated after construction.

use std::time::Duration;

/// HTTP method subset used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outgoing API request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Fully built URL (controller/container/action already resolved)
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// JSON body for POST requests
    pub body: Option<serde_json::Value>,
    /// Query string pairs for GET requests
    pub query: Vec<(String, String)>,
    /// Per-request timeout override; None uses the transport default
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    /// Create a GET request for the given URL
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            body: None,
            query: Vec::new(),
            timeout: None,
        }
    }

    /// Create a POST request with a JSON body
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            body: Some(body),
            query: Vec::new(),
            timeout: None,
        }
    }

    /// Attach query string pairs
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
