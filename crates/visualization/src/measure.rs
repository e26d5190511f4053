//! Measure value object
//!
//! Measures are plottable data elements (columns), numeric or date typed,
//! associated with a schema/query pair. A measure is immutable once
//! constructed; its schema/query names feed every subsequent dimension
//! lookup unchanged.

use contracts::Result;
use serde::Deserialize;

use crate::client::{GetDimensions, VisualizationClient};
use crate::dimension::Dimension;

/// Fields a measure is constructed from
///
/// A fixed schema: fields the server record does not carry stay `None`, and
/// unknown fields in the record are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasureConfig {
    pub description: Option<String>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub query_name: Option<String>,
    pub schema_name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub is_user_defined: Option<bool>,
}

/// A plottable data column definition
#[derive(Debug, Clone, Default)]
pub struct Measure {
    description: Option<String>,
    label: Option<String>,
    name: Option<String>,
    query_name: Option<String>,
    schema_name: Option<String>,
    ty: Option<String>,
    is_user_defined: Option<bool>,
}

impl Measure {
    /// Create a measure from its configuration
    pub fn new(config: MeasureConfig) -> Self {
        Self {
            description: config.description,
            label: config.label,
            name: config.name,
            query_name: config.query_name,
            schema_name: config.schema_name,
            ty: config.ty,
            is_user_defined: config.is_user_defined,
        }
    }

    /// Create a measure from a raw server record
    pub fn from_record(record: serde_json::Value) -> Result<Self> {
        let config: MeasureConfig = serde_json::from_value(record)
            .map_err(|e| contracts::ClientError::unexpected(format!("bad measure record: {e}")))?;
        Ok(Self::new(config))
    }

    /// Description of this measure
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Display label of this measure
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Column name of this measure
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name of the query associated with this measure
    pub fn query_name(&self) -> Option<&str> {
        self.query_name.as_deref()
    }

    /// Name of the schema associated with this measure
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    /// Data type of this measure
    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    /// Whether this measure is part of a user-defined query, versus a
    /// built-in/system-provided one
    pub fn is_user_defined(&self) -> bool {
        self.is_user_defined.unwrap_or(false)
    }

    /// Fetch the set of available [`Dimension`]s for this measure
    ///
    /// Each call re-fetches from the server; nothing is cached.
    pub async fn get_dimensions<T: contracts::Transport>(
        &self,
        client: &VisualizationClient<T>,
        options: GetDimensions,
    ) -> Result<Vec<Dimension>> {
        client.dimensions_for(self, options).await
    }
}

impl From<MeasureConfig> for Measure {
    fn from(config: MeasureConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_measure_from_config() {
        let measure = Measure::new(MeasureConfig {
            name: Some("Age".into()),
            is_user_defined: Some(true),
            ..Default::default()
        });

        assert_eq!(measure.name(), Some("Age"));
        assert!(measure.is_user_defined());
        assert_eq!(measure.description(), None);
    }

    #[test]
    fn test_measure_from_record_ignores_unknown_fields() {
        let measure = Measure::from_record(json!({
            "name": "Weight",
            "schemaName": "study",
            "queryName": "Physical Exam",
            "type": "NUMERIC",
            "somethingElse": {"nested": true},
        }))
        .unwrap();

        assert_eq!(measure.name(), Some("Weight"));
        assert_eq!(measure.schema_name(), Some("study"));
        assert_eq!(measure.query_name(), Some("Physical Exam"));
        assert_eq!(measure.ty(), Some("NUMERIC"));
        assert!(!measure.is_user_defined());
    }

    #[test]
    fn test_measure_from_bad_record() {
        assert!(Measure::from_record(json!("not an object")).is_err());
    }
}
