//! VisualizationClient - dimension lookup for measures

use contracts::{ApiRequest, ClientError, Result, Transport};
use serde_json::Value;
use tracing::{debug, instrument};
use transport::UrlBuilder;

use crate::dimension::Dimension;
use crate::measure::Measure;

const VISUALIZATION: &str = "visualization";

/// Options for a dimension lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDimensions {
    /// Applies only to measures from study datasets: also include dimensions
    /// from demographic datasets. The flag is only ever sent when `true`.
    pub include_demographics: bool,
}

/// Visualization facade
pub struct VisualizationClient<T> {
    transport: T,
    urls: UrlBuilder,
}

impl<T: Transport> VisualizationClient<T> {
    /// Create a client over the given transport and server base
    pub fn new(transport: T, urls: UrlBuilder) -> Self {
        Self { transport, urls }
    }

    /// Fetch the dimensions associated with a measure's schema/query
    ///
    /// An absent or empty `dimensions` field in the response yields an empty
    /// list, never an error.
    #[instrument(
        name = "visualization_get_dimensions",
        skip(self, measure, options),
        fields(
            schema = measure.schema_name().unwrap_or(""),
            query = measure.query_name().unwrap_or(""),
            include_demographics = options.include_demographics,
        )
    )]
    pub async fn dimensions_for(
        &self,
        measure: &Measure,
        options: GetDimensions,
    ) -> Result<Vec<Dimension>> {
        let mut query = Vec::new();
        if let Some(query_name) = measure.query_name() {
            query.push(("queryName".to_string(), query_name.to_string()));
        }
        if let Some(schema_name) = measure.schema_name() {
            query.push(("schemaName".to_string(), schema_name.to_string()));
        }
        if options.include_demographics {
            query.push(("includeDemographics".to_string(), "true".to_string()));
        }

        // the dimensions action carries no container path and no .api suffix
        let url = self.urls.build(VISUALIZATION, "getDimensions", None);
        let request = ApiRequest::get(url).with_query(query);

        let response = self.transport.send(request).await?;
        let dimensions = parse_dimensions(&response.body)?;
        debug!(count = dimensions.len(), "Dimensions fetched");
        Ok(dimensions)
    }
}

/// Map the response's `dimensions` list into records, preserving order
fn parse_dimensions(body: &Value) -> Result<Vec<Dimension>> {
    let Some(records) = body.get("dimensions").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    records
        .iter()
        .map(|record| {
            serde_json::from_value(record.clone())
                .map_err(|e| ClientError::unexpected(format!("bad dimension record: {e}")))
        })
        .collect()
}
