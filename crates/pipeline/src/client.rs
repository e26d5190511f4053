//! PipelineClient core implementation
//!
//! Each operation builds one request, issues it through the transport, and
//! maps the response. Precondition failures are returned before any I/O.

use std::time::Duration;

use contracts::{ApiRequest, ApiResponse, ClientError, Result, Transport};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use transport::{RequestHandle, UrlBuilder};

use crate::config::{
    GetFileStatus, GetPipelineContainer, GetProtocols, ProtocolConfig, StartAnalysis,
};
use crate::response::{FileStatusResponse, ProtocolsResponse};

/// Timeout for operations that wait on long-running server-side work
///
/// 60 000 000 ms, effectively unbounded; large analyses may run long.
pub const EXTENDED_TIMEOUT: Duration = Duration::from_millis(60_000_000);

const PIPELINE_ANALYSIS: &str = "pipeline-analysis";
const PIPELINE: &str = "pipeline";

/// Pipeline operations facade
///
/// Stateless; holds only the transport and the URL builder. Calls never
/// share state, so a single client can serve concurrent callers.
pub struct PipelineClient<T> {
    transport: T,
    urls: UrlBuilder,
}

impl<T: Transport> PipelineClient<T> {
    /// Create a client over the given transport and server base
    pub fn new(transport: T, urls: UrlBuilder) -> Self {
        Self { transport, urls }
    }

    /// Get the status of analysis using a particular protocol for a
    /// particular pipeline task
    ///
    /// Waits with the extended timeout. Does not expose the request handle;
    /// the call cannot be cancelled once issued.
    #[instrument(
        name = "pipeline_get_file_status",
        skip(self, config),
        fields(task_id = %config.task_id, protocol = %config.protocol_name, files = config.files.len())
    )]
    pub async fn get_file_status(&self, config: GetFileStatus) -> Result<FileStatusResponse> {
        // include_workbooks is accepted but not part of this action's body
        let params = FileStatusParams {
            task_id: &config.task_id,
            path: &config.path,
            file: &config.files,
            protocol_name: &config.protocol_name,
        };

        let url = self.urls.build(
            PIPELINE_ANALYSIS,
            "getFileStatus.api",
            config.container_path.as_deref(),
        );
        let request = ApiRequest::post(url, encode(&params)?).with_timeout(EXTENDED_TIMEOUT);

        let response = self.transport.send(request).await?;
        Ok(FileStatusResponse::from_body(response.body))
    }

    /// Get the container in which the pipeline for this container is defined
    ///
    /// This may be the container the request was scoped to, or a parent
    /// container if the pipeline was defined there. The response body is
    /// passed through unmodified.
    ///
    /// # Returns
    /// The only operation that hands back a [`RequestHandle`], so the caller
    /// may abort it while in flight.
    #[instrument(name = "pipeline_get_container", skip(self, config))]
    pub fn get_pipeline_container(
        &self,
        config: GetPipelineContainer,
    ) -> RequestHandle<ApiResponse>
    where
        T: Clone + 'static,
    {
        let url = self.urls.build(
            PIPELINE,
            "getPipelineContainer.api",
            config.container_path.as_deref(),
        );
        debug!(url = %url, "Issuing pipeline container lookup");

        let transport = self.transport.clone();
        RequestHandle::spawn(async move { transport.send(ApiRequest::get(url)).await })
    }

    /// List the protocols saved for a pipeline task
    #[instrument(
        name = "pipeline_get_protocols",
        skip(self, config),
        fields(task_id = %config.task_id)
    )]
    pub async fn get_protocols(&self, config: GetProtocols) -> Result<ProtocolsResponse> {
        let params = ProtocolsParams {
            task_id: &config.task_id,
            // absent means false on the wire, never omitted
            include_workbooks: config.include_workbooks.unwrap_or(false),
            path: &config.path,
        };

        let url = self.urls.build(
            PIPELINE_ANALYSIS,
            "getSavedProtocols.api",
            config.container_path.as_deref(),
        );
        let request = ApiRequest::post(url, encode(&params)?);

        let response = self.transport.send(request).await?;
        Ok(ProtocolsResponse::from_body(response.body))
    }

    /// Start analysis of a set of files using a particular protocol
    /// definition with a particular pipeline task
    ///
    /// Fails before any I/O when `protocol_name` is empty or when structured
    /// data is supplied for the deprecated XML protocol configuration.
    #[instrument(
        name = "pipeline_start_analysis",
        skip(self, config),
        fields(task_id = %config.task_id, protocol = %config.protocol_name, files = config.files.len())
    )]
    pub async fn start_analysis(&self, config: StartAnalysis) -> Result<ApiResponse> {
        if config.protocol_name.is_empty() {
            warn!("start_analysis rejected: empty protocol_name");
            return Err(ClientError::invalid_config(
                "protocol_name",
                "must not be empty",
            ));
        }

        // XML takes precedence over JSON when both are supplied
        let mut configure_xml = None;
        let mut configure_json = None;
        if let Some(xml) = &config.xml_parameters {
            match xml {
                ProtocolConfig::Text(text) => configure_xml = Some(text.as_str()),
                ProtocolConfig::Data(_) => return Err(ClientError::DeprecatedXmlConfig),
            }
        } else if let Some(json) = &config.json_parameters {
            configure_json = Some(match json {
                ProtocolConfig::Text(text) => text.clone(),
                ProtocolConfig::Data(value) => {
                    serde_json::to_string(value).map_err(|e| ClientError::encode(e.to_string()))?
                }
            });
        }

        let params = StartAnalysisParams {
            task_id: &config.task_id,
            path: &config.path,
            protocol_name: &config.protocol_name,
            protocol_description: config.protocol_description.as_deref(),
            file: &config.files,
            file_ids: &config.file_ids,
            allow_non_existent_files: config.allow_non_existent_files,
            // absent means true; an explicit false is preserved
            save_protocol: config.save_protocol.unwrap_or(true),
            configure_xml,
            configure_json,
        };

        let url = self.urls.build(
            PIPELINE_ANALYSIS,
            "startAnalysis.api",
            config.container_path.as_deref(),
        );
        let request = ApiRequest::post(url, encode(&params)?).with_timeout(EXTENDED_TIMEOUT);

        self.transport.send(request).await
    }
}

fn encode<P: Serialize>(params: &P) -> Result<serde_json::Value> {
    serde_json::to_value(params).map_err(|e| ClientError::encode(e.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileStatusParams<'a> {
    task_id: &'a str,
    path: &'a str,
    file: &'a [String],
    protocol_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProtocolsParams<'a> {
    task_id: &'a str,
    include_workbooks: bool,
    path: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartAnalysisParams<'a> {
    task_id: &'a str,
    path: &'a str,
    protocol_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol_description: Option<&'a str>,
    file: &'a [String],
    file_ids: &'a [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_non_existent_files: Option<bool>,
    save_protocol: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    configure_xml: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configure_json: Option<String>,
}
