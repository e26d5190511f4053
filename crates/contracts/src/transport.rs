//! HTTP transport abstraction
//!
//! Defines the trait for issuing API requests, supporting the real reqwest
//! implementation and mock testing.

use std::future::Future;

use crate::error::Result;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Transport trait
///
/// Abstracts the HTTP request primitive for testing and implementation
/// replacement. Each call resolves to exactly one of `Ok(response)` /
/// `Err(error)`; retries, pooling and authentication live below this trait.
pub trait Transport: Send + Sync {
    /// Issue a single request
    ///
    /// # Returns
    /// The parsed response on 2xx, or a normalized error. Non-2xx statuses
    /// surface as [`crate::ClientError::Server`], never as an `Ok`.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}
