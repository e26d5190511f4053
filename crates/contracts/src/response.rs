//! Wire response value type

/// A parsed API response
///
/// Carries the parsed JSON body plus the HTTP status, so facades can both
/// extract named fields and hand the raw body back to callers untouched.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body (`null` for an empty body)
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Create a response
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }
}
