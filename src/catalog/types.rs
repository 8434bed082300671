//! Catalog data records
//!
//! Field names follow the wire format of the telemetry archive's HTTP API
//! (camelCase), so the same types decode service responses and catalog
//! files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Engineering type of a parameter's calibrated value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineeringType {
    Float,
    Integer,
    Boolean,
    String,
    Enumeration,
    Binary,
    Time,
    Aggregate,
    Array,
    /// Fallback for types this crate does not know about
    #[serde(other)]
    Unknown,
}

impl EngineeringType {
    /// Whether values of this type can be aggregated numerically
    pub fn is_numeric(&self) -> bool {
        matches!(self, EngineeringType::Float | EngineeringType::Integer)
    }
}

impl fmt::Display for EngineeringType {
    // Uppercase, the way selector widgets caption option types
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineeringType::Float => write!(f, "FLOAT"),
            EngineeringType::Integer => write!(f, "INTEGER"),
            EngineeringType::Boolean => write!(f, "BOOLEAN"),
            EngineeringType::String => write!(f, "STRING"),
            EngineeringType::Enumeration => write!(f, "ENUMERATION"),
            EngineeringType::Binary => write!(f, "BINARY"),
            EngineeringType::Time => write!(f, "TIME"),
            EngineeringType::Aggregate => write!(f, "AGGREGATE"),
            EngineeringType::Array => write!(f, "ARRAY"),
            EngineeringType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterTypeInfo {
    pub eng_type: EngineeringType,
}

/// One catalog search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSummary {
    /// Short name, the final segment of the qualified name
    pub name: String,
    /// Unique hierarchical identifier, '/'-delimited
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<ParameterTypeInfo>,
}

/// Full descriptive record for one parameter, resolved via the dictionary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterMetadata {
    pub name: String,
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<ParameterTypeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl ParameterMetadata {
    pub fn eng_type(&self) -> Option<EngineeringType> {
        self.parameter_type.map(|t| t.eng_type)
    }

    /// Whether the parameter holds numerically aggregatable values
    pub fn is_numeric(&self) -> bool {
        matches!(self.eng_type(), Some(t) if t.is_numeric())
    }

    /// Search-result view of this record
    pub fn summary(&self) -> ParameterSummary {
        ParameterSummary {
            name: self.name.clone(),
            qualified_name: self.qualified_name.clone(),
            short_description: self.short_description.clone(),
            long_description: self.long_description.clone(),
            parameter_type: self.parameter_type,
        }
    }
}

/// Parameter dictionary: qualified name to metadata.
///
/// Clones share the underlying map, so catalog implementations hand out
/// clones of one load.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    parameters: Arc<HashMap<String, ParameterMetadata>>,
}

impl Dictionary {
    pub fn new(entries: impl IntoIterator<Item = ParameterMetadata>) -> Self {
        let parameters = entries
            .into_iter()
            .map(|info| (info.qualified_name.clone(), info))
            .collect();
        Dictionary {
            parameters: Arc::new(parameters),
        }
    }

    /// Look up one parameter's metadata. `None` means the dictionary has
    /// no such entry, which callers treat as "metadata unknown".
    pub fn get_parameter_info(&self, qualified_name: &str) -> Option<&ParameterMetadata> {
        self.parameters.get(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterPage {
    /// The service omits the field entirely when nothing matched
    #[serde(default)]
    pub parameters: Vec<ParameterSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
