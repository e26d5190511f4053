//! # Integration Tests
//!
//! Cross-crate flows against the mock transport:
//! - a full analysis submission round (container, protocols, file status,
//!   start)
//! - measure/dimension lookup driven from raw server records
//! - error-channel separation across crate boundaries

#[cfg(test)]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Repeated init across tests is fine; later calls are no-ops
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .try_init();
}

#[cfg(test)]
mod submission_flow {
    use contracts::ClientError;
    use pipeline::{
        GetFileStatus, GetPipelineContainer, GetProtocols, PipelineClient, ProtocolConfig,
        StartAnalysis, EXTENDED_TIMEOUT,
    };
    use serde_json::json;
    use transport::{MockTransport, UrlBuilder};

    fn client(mock: &MockTransport) -> PipelineClient<MockTransport> {
        PipelineClient::new(mock.clone(), UrlBuilder::new("http://localhost:8080"))
    }

    /// End-to-end submission round: resolve the pipeline container, list the
    /// saved protocols, check file status, then start the analysis. Every
    /// wire payload is asserted on the shared mock.
    #[tokio::test]
    async fn test_full_submission_round() -> anyhow::Result<()> {
        super::init_logging();

        let mock = MockTransport::new();
        mock.respond_with(json!({"containerPath": "/home/project"}));
        mock.respond_with(json!({
            "protocols": [{"name": "default", "jsonParameters": {"bitset": 2}}],
            "defaultProtocolName": "default",
        }));
        mock.respond_with(json!({
            "files": [
                {"name": "run1.mzML", "status": "UNKNOWN"},
                {"name": "run2.mzML", "status": "UNKNOWN"},
            ],
            "submitType": "text",
        }));
        mock.respond_with(json!({"status": "success", "jobGUIDs": ["abc-123"]}));

        let client = client(&mock);

        // 1. Resolve the container (the one abortable operation)
        let container = client
            .get_pipeline_container(GetPipelineContainer::default())
            .join()
            .await?;
        let container_path = container.body["containerPath"].as_str().unwrap().to_string();
        assert_eq!(container_path, "/home/project");

        // 2. List saved protocols in that container
        let protocols = client
            .get_protocols(GetProtocols {
                path: "raw".into(),
                task_id: "task:search".into(),
                container_path: Some(container_path.clone()),
                include_workbooks: None,
            })
            .await?;
        assert_eq!(protocols.default_protocol_name.as_deref(), Some("default"));

        // 3. Check file status under the default protocol
        let files = vec!["run1.mzML".to_string(), "run2.mzML".to_string()];
        let status = client
            .get_file_status(GetFileStatus {
                files: files.clone(),
                path: "raw".into(),
                protocol_name: "default".into(),
                task_id: "task:search".into(),
                container_path: Some(container_path.clone()),
                include_workbooks: None,
            })
            .await?;
        assert_eq!(status.files.len(), 2);
        assert_eq!(status.submit_type.as_deref(), Some("text"));

        // 4. Start the analysis
        let mut start = StartAnalysis::new(
            files,
            vec![101, 102],
            "raw",
            "default",
            "task:search",
        );
        start.container_path = Some(container_path);
        start.json_parameters = Some(ProtocolConfig::Data(json!({"bitset": 2})));
        let started = client.start_analysis(start).await?;
        assert_eq!(started.body["status"], "success");

        // Wire-level assertions across the whole round
        let requests = mock.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(
            requests[0].url,
            "http://localhost:8080/pipeline/getPipelineContainer.api"
        );
        assert_eq!(
            requests[1].url,
            "http://localhost:8080/pipeline-analysis/home/project/getSavedProtocols.api"
        );
        assert_eq!(requests[1].body.as_ref().unwrap()["includeWorkbooks"], json!(false));
        assert_eq!(
            requests[2].body.as_ref().unwrap()["file"],
            json!(["run1.mzML", "run2.mzML"])
        );
        assert_eq!(requests[2].timeout, Some(EXTENDED_TIMEOUT));
        let start_body = requests[3].body.as_ref().unwrap();
        assert_eq!(start_body["saveProtocol"], json!(true));
        assert_eq!(start_body["fileIds"], json!([101, 102]));
        assert_eq!(start_body["configureJson"], json!(r#"{"bitset":2}"#));

        Ok(())
    }

    /// Precondition failures never reach the transport, even mid-flow.
    #[tokio::test]
    async fn test_precondition_failures_issue_no_requests() {
        let mock = MockTransport::new();
        let client = client(&mock);

        let mut bad_xml = StartAnalysis::new(vec!["a.mzML".into()], vec![1], "raw", "p", "t");
        bad_xml.xml_parameters = Some(ProtocolConfig::Data(json!({})));
        let err = client.start_analysis(bad_xml).await.unwrap_err();
        assert!(err.is_precondition());

        let no_protocol = StartAnalysis::new(vec!["a.mzML".into()], vec![1], "raw", "", "t");
        let err = client.start_analysis(no_protocol).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig { .. }));

        assert_eq!(mock.request_count(), 0);
    }

    /// A server rejection flows back as a normalized error, never a panic
    /// and never a precondition error.
    #[tokio::test]
    async fn test_server_rejection_is_normalized() {
        let mock = MockTransport::new();
        mock.push_failure(ClientError::Server(contracts::ErrorInfo {
            message: "Cannot find protocol: missing".into(),
            status: Some(404),
            exception_class: Some("org.server.api.pipeline.PipelineProtocolException".into()),
        }));

        let err = client(&mock)
            .get_protocols(GetProtocols {
                path: "raw".into(),
                task_id: "task:search".into(),
                container_path: None,
                include_workbooks: None,
            })
            .await
            .unwrap_err();

        match err {
            ClientError::Server(info) => {
                assert_eq!(info.status, Some(404));
                assert!(info.message.contains("missing"));
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod measure_flow {
    use visualization::{GetDimensions, Measure, VisualizationClient};

    use serde_json::json;
    use transport::{MockTransport, UrlBuilder};

    /// A measure picked out of a server record drives the dimension lookup
    /// with its own schema/query names.
    #[tokio::test]
    async fn test_measure_record_to_dimensions() {
        super::init_logging();

        let mock = MockTransport::new();
        mock.respond_with(json!({
            "dimensions": [
                {"name": "Cohort", "schemaName": "study", "queryName": "Demographics"},
                {"name": "Country", "schemaName": "study", "queryName": "Demographics"},
            ]
        }));

        let measure = Measure::from_record(json!({
            "name": "Age",
            "label": "Age (years)",
            "schemaName": "study",
            "queryName": "Demographics",
            "type": "NUMERIC",
            "isUserDefined": false,
        }))
        .unwrap();

        let client =
            VisualizationClient::new(mock.clone(), UrlBuilder::new("http://localhost:8080"));
        let dimensions = measure
            .get_dimensions(&client, GetDimensions::default())
            .await
            .unwrap();

        assert_eq!(dimensions.len(), 2);
        assert_eq!(dimensions[0].name.as_deref(), Some("Cohort"));
        assert_eq!(dimensions[1].name.as_deref(), Some("Country"));

        let request = &mock.requests()[0];
        assert!(request
            .query
            .contains(&("schemaName".to_string(), "study".to_string())));
        assert!(request
            .query
            .contains(&("queryName".to_string(), "Demographics".to_string())));
    }
}
