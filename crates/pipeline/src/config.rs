//! Request configurations for the pipeline operations
//!
//! Plain records, consumed once per call. Required fields are plain values,
//! optional fields are `Option` and absent values are simply left out of the
//! outgoing payload.

/// Protocol parameters, as raw text or structured data
///
/// The XML path only accepts `Text`; supplying `Data` for it is rejected
/// before any request is issued.
#[derive(Debug, Clone)]
pub enum ProtocolConfig {
    /// Raw configuration text, passed through verbatim
    Text(String),
    /// Structured configuration, serialized to a JSON string on the wire
    Data(serde_json::Value),
}

/// Configuration for [`crate::PipelineClient::get_file_status`]
#[derive(Debug, Clone)]
pub struct GetFileStatus {
    /// Names of the files to check, relative to `path`
    pub files: Vec<String>,
    /// Path relative to the container's pipeline root
    pub path: String,
    /// Name of the saved protocol definition
    pub protocol_name: String,
    /// Identifier of the pipeline task
    pub task_id: String,
    /// Container in which to scope the request
    pub container_path: Option<String>,
    /// Accepted for parity with [`GetProtocols`]; this action's wire body
    /// never carries it and the server resolves workbook scoping itself.
    pub include_workbooks: Option<bool>,
}

/// Configuration for [`crate::PipelineClient::get_pipeline_container`]
#[derive(Debug, Clone, Default)]
pub struct GetPipelineContainer {
    /// Container in which to scope the request
    pub container_path: Option<String>,
}

/// Configuration for [`crate::PipelineClient::get_protocols`]
#[derive(Debug, Clone)]
pub struct GetProtocols {
    /// Path relative to the container's pipeline root
    pub path: String,
    /// Identifier of the pipeline task
    pub task_id: String,
    /// Container in which to scope the request
    pub container_path: Option<String>,
    /// Include protocols saved in workbooks; absent is sent as `false`
    pub include_workbooks: Option<bool>,
}

/// Configuration for [`crate::PipelineClient::start_analysis`]
#[derive(Debug, Clone)]
pub struct StartAnalysis {
    /// Names of the files to analyze, relative to `path`
    pub files: Vec<String>,
    /// Data ids of the files to analyze
    pub file_ids: Vec<i64>,
    /// Path relative to the container's pipeline root
    pub path: String,
    /// Name of the protocol definition; must not be empty
    pub protocol_name: String,
    /// Identifier of the pipeline task
    pub task_id: String,
    /// Allow starting when some named files do not exist yet
    pub allow_non_existent_files: Option<bool>,
    /// Container in which to scope the request
    pub container_path: Option<String>,
    /// JSON protocol parameters; ignored when `xml_parameters` is present
    pub json_parameters: Option<ProtocolConfig>,
    /// Description stored with a newly saved protocol
    pub protocol_description: Option<String>,
    /// Save the protocol definition for reuse; absent means `true`
    pub save_protocol: Option<bool>,
    /// Deprecated XML protocol parameters; only raw text is accepted
    pub xml_parameters: Option<ProtocolConfig>,
}

impl StartAnalysis {
    /// Minimal configuration with every optional field absent
    pub fn new(
        files: Vec<String>,
        file_ids: Vec<i64>,
        path: impl Into<String>,
        protocol_name: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            files,
            file_ids,
            path: path.into(),
            protocol_name: protocol_name.into(),
            task_id: task_id.into(),
            allow_non_existent_files: None,
            container_path: None,
            json_parameters: None,
            protocol_description: None,
            save_protocol: None,
            xml_parameters: None,
        }
    }
}
