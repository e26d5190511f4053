//! # Contracts
//!
//! Frozen interface contracts, defining the types shared by every crate in
//! the workspace: the unified error type, the normalized server-error record,
//! the wire request/response value types, and the [`Transport`] trait.
//! All business crates can only depend on this crate, reverse dependencies
//! are prohibited.

mod error;
mod request;
mod response;
mod transport;

pub use error::*;
pub use request::*;
pub use response::ApiResponse;
pub use transport::Transport;
