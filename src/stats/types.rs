//! Statistic kinds requested by sampled-parameter queries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Aggregation applied to sampled parameter values.
///
/// Which kinds a query may request depends on the selected parameter; see
/// [`crate::stats::StatRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Min,
    Max,
    Avg,
    Count,
}

impl StatKind {
    /// All known kinds, in picker order.
    pub const ALL: [StatKind; 4] = [StatKind::Min, StatKind::Max, StatKind::Avg, StatKind::Count];
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::Min => write!(f, "min"),
            StatKind::Max => write!(f, "max"),
            StatKind::Avg => write!(f, "avg"),
            StatKind::Count => write!(f, "count"),
        }
    }
}

/// Error returned when a stat kind name is not recognized
#[derive(Debug, Error)]
#[error("unknown stat kind: {0}")]
pub struct ParseStatError(String);

impl FromStr for StatKind {
    type Err = ParseStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(StatKind::Min),
            "max" => Ok(StatKind::Max),
            "avg" => Ok(StatKind::Avg),
            "count" => Ok(StatKind::Count),
            other => Err(ParseStatError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
