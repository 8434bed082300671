//! Query model owned by the host panel

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::stats::StatKind;

/// Kind of data query the host panel is composing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryType {
    ParameterValue,
    ParameterSamples,
    ListEvents,
}

impl QueryType {
    /// Samples queries are the ones that carry a stats selection
    pub fn wants_samples(&self) -> bool {
        matches!(self, QueryType::ParameterSamples)
    }
}

/// Error returned when a query type name is not recognized
#[derive(Debug, Error)]
#[error("unknown query type: {0}")]
pub struct ParseQueryTypeError(String);

impl FromStr for QueryType {
    type Err = ParseQueryTypeError;

    /// Accepts the wire names and their short forms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" | "parameterValue" => Ok(QueryType::ParameterValue),
            "samples" | "parameterSamples" => Ok(QueryType::ParameterSamples),
            "events" | "listEvents" => Ok(QueryType::ListEvents),
            other => Err(ParseQueryTypeError(other.to_string())),
        }
    }
}

/// User-editable query state.
///
/// Owned by the host panel; the editor never mutates one in place, it
/// builds an updated value and hands it back through the host callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub query_type: QueryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<StatKind>>,
}

impl Query {
    pub fn new(query_type: QueryType) -> Self {
        Query {
            query_type,
            parameter: None,
            stats: None,
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
