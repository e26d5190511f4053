//! Typed views over the pipeline responses
//!
//! The named fields are extracted from the body; the full raw body is kept
//! alongside so nothing the server returned is lost.

use serde_json::Value;

/// Outcome of a file status lookup
#[derive(Debug, Clone)]
pub struct FileStatusResponse {
    /// Per-file status records, in server order
    pub files: Vec<Value>,
    /// How the server would submit the analysis for these files
    pub submit_type: Option<String>,
    /// Raw response body
    pub response: Value,
}

impl FileStatusResponse {
    pub(crate) fn from_body(body: Value) -> Self {
        let files = body
            .get("files")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let submit_type = body
            .get("submitType")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            files,
            submit_type,
            response: body,
        }
    }
}

/// Outcome of a saved-protocol listing
#[derive(Debug, Clone)]
pub struct ProtocolsResponse {
    /// Saved protocol records, in server order
    pub protocols: Vec<Value>,
    /// Name of the protocol the server would pick by default
    pub default_protocol_name: Option<String>,
    /// Raw response body
    pub response: Value,
}

impl ProtocolsResponse {
    pub(crate) fn from_body(body: Value) -> Self {
        let protocols = body
            .get("protocols")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let default_protocol_name = body
            .get("defaultProtocolName")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            protocols,
            default_protocol_name,
            response: body,
        }
    }
}
