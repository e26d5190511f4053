//! URL construction
//!
//! The server routes requests as `{base}/{controller}{/container...}/{action}`.
//! The container path is a hierarchical location scoping where the operation
//! applies; when absent the server resolves the current container itself.

/// Builds action URLs against a fixed server base
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// Create a builder for the given server base URL
    ///
    /// A trailing slash on the base is tolerated and trimmed.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Build the URL for a controller action
    ///
    /// # Arguments
    /// * `controller` - e.g. "pipeline-analysis"
    /// * `action` - e.g. "startAnalysis.api"
    /// * `container_path` - optional container scoping, e.g. "/home/project"
    pub fn build(&self, controller: &str, action: &str, container_path: Option<&str>) -> String {
        let mut url = format!("{}/{}", self.base, controller);

        if let Some(container) = container_path {
            let trimmed = container.trim_matches('/');
            if !trimmed.is_empty() {
                url.push('/');
                url.push_str(trimmed);
            }
        }

        url.push('/');
        url.push_str(action);
        url
    }

    /// Server base URL
    pub fn base(&self) -> &str {
        &self.base
    }
}
