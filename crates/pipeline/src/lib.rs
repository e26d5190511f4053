//! # Pipeline
//!
//! Client facade for the pipeline-analysis API family: file status lookup,
//! pipeline container resolution, saved protocol listing and analysis start.
//!
//! Four stateless operations, each a single request/response translation.
//! No state is shared between calls; each call is independent.

mod client;
mod config;
mod response;

pub use client::{PipelineClient, EXTENDED_TIMEOUT};
pub use config::{
    GetFileStatus, GetPipelineContainer, GetProtocols, ProtocolConfig, StartAnalysis,
};
pub use response::{FileStatusResponse, ProtocolsResponse};
