//! Per-parameter stat capability rules

use crate::catalog::ParameterMetadata;

use super::types::StatKind;

/// Decides which statistics apply to a parameter and what to fall back to
/// when a selection leaves none.
///
/// `default_stat` must accept unknown metadata: the editor asks for a
/// default while a dictionary lookup is still in flight or came back empty.
pub trait StatRegistry {
    fn is_valid(&self, kind: StatKind, info: &ParameterMetadata) -> bool;
    fn default_stat(&self, info: Option<&ParameterMetadata>) -> StatKind;
}

/// Capability rules keyed on the parameter's engineering type.
///
/// Min/max/avg only make sense for numeric parameters; count applies to
/// everything. Parameters with no declared type are treated as non-numeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngTypeStatRegistry;

impl StatRegistry for EngTypeStatRegistry {
    fn is_valid(&self, kind: StatKind, info: &ParameterMetadata) -> bool {
        match kind {
            StatKind::Count => true,
            StatKind::Min | StatKind::Max | StatKind::Avg => info.is_numeric(),
        }
    }

    fn default_stat(&self, info: Option<&ParameterMetadata>) -> StatKind {
        match info {
            Some(info) if info.is_numeric() => StatKind::Avg,
            _ => StatKind::Count,
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
