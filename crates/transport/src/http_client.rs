//! HttpTransport - reqwest-backed transport implementation
//!
//! Connection pooling, TLS and keep-alive are owned by the inner
//! `reqwest::Client`; this layer only shapes requests and normalizes errors.

use contracts::{ApiRequest, ApiResponse, ClientError, ErrorInfo, Method, Result, Transport};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Transport that issues requests over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing client
    ///
    /// Lets an application share one connection pool across API layers.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn prepare(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url).query(&request.query),
            Method::Post => {
                let builder = self.client.post(&request.url);
                match &request.body {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        builder
    }
}

impl Transport for HttpTransport {
    #[instrument(
        name = "http_transport_send",
        skip(self, request),
        fields(url = %request.url, method = ?request.method)
    )]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self
            .prepare(&request)
            .send()
            .await
            .map_err(|e| ClientError::http(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::http(e.to_string()))?;

        let body = parse_body(&text);

        if !(200..300).contains(&status) {
            let info = ErrorInfo::from_body(status, body.as_ref().unwrap_or(&Value::Null));
            warn!(status, error = %info, "Request failed");
            return Err(ClientError::Server(info));
        }

        let body = body.ok_or_else(|| {
            ClientError::unexpected(format!("response body is not valid JSON (status {status})"))
        })?;

        debug!(status, "Request succeeded");
        Ok(ApiResponse::new(status, body))
    }
}

/// Parse a response body, treating an empty body as JSON `null`
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return Some(Value::Null);
    }
    serde_json::from_str(text).ok()
}
