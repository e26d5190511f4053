//! # Transport
//!
//! The leaf utilities every facade builds on:
//!
//! - [`UrlBuilder`]: server base + controller + optional container path +
//!   action → URL string
//! - [`HttpTransport`]: reqwest-backed [`contracts::Transport`] implementation
//! - [`MockTransport`]: scripted transport for unit and integration tests
//! - [`RequestHandle`]: abortable handle around an in-flight request task

mod handle;
mod http_client;
mod mock;
mod url;

pub use handle::RequestHandle;
pub use http_client::HttpTransport;
pub use mock::MockTransport;
pub use url::UrlBuilder;
