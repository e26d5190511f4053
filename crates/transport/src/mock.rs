//! Mock transport
//!
//! Scripted transport for unit tests, supporting request capture and
//! failure injection.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use contracts::{ApiRequest, ApiResponse, ClientError, Result, Transport};
use serde_json::Value;
use tracing::instrument;

/// Transport that replays scripted responses and records every request
///
/// Responses are consumed FIFO; when the script runs dry the mock answers
/// `200` with a `null` body, so payload-capture tests need no scripting.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
    delay: Mutex<Option<Duration>>,
}

impl MockTransport {
    /// Create a mock with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body
    pub fn respond_with(&self, body: Value) {
        self.push_response(ApiResponse::new(200, body));
    }

    /// Queue a full response
    pub fn push_response(&self, response: ApiResponse) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(response));
    }

    /// Queue a failure
    pub fn push_failure(&self, error: ClientError) {
        self.inner.responses.lock().unwrap().push_back(Err(error));
    }

    /// Delay every send, for cancellation tests
    pub fn set_delay(&self, delay: Duration) {
        *self.inner.delay.lock().unwrap() = Some(delay);
    }

    /// All requests issued so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// Number of requests issued so far
    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    #[instrument(name = "mock_transport_send", skip(self, request), fields(url = %request.url))]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let delay = *self.inner.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.inner.requests.lock().unwrap().push(request);

        match self.inner.responses.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(ApiResponse::new(200, Value::Null)),
        }
    }
}
