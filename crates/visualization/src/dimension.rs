//! Dimension record
//!
//! A dimension is a categorical value set associated with a measure, used
//! for filtering and grouping in visualizations. Records come straight from
//! the dimensions endpoint.

use serde::Deserialize;

/// A categorical column associated with a measure's query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dimension {
    pub description: Option<String>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub query_name: Option<String>,
    pub schema_name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
}
