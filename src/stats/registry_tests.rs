//! Tests for the engineering-type capability rules

use super::*;
use crate::catalog::EngineeringType;
use crate::test_utils::test_helpers::{metadata, untyped_metadata};
use insta::assert_debug_snapshot;

#[test]
fn test_count_applies_to_everything() {
    let registry = EngTypeStatRegistry;

    assert!(registry.is_valid(StatKind::Count, &metadata("/a", EngineeringType::Float)));
    assert!(registry.is_valid(StatKind::Count, &metadata("/a", EngineeringType::String)));
    assert!(registry.is_valid(StatKind::Count, &untyped_metadata("/a")));
}

#[test]
fn test_numeric_aggregations_require_numeric_types() {
    let registry = EngTypeStatRegistry;
    let voltage = metadata("/a/volts", EngineeringType::Float);
    let count = metadata("/a/count", EngineeringType::Integer);
    let mode = metadata("/a/mode", EngineeringType::Enumeration);

    for kind in [StatKind::Min, StatKind::Max, StatKind::Avg] {
        assert!(registry.is_valid(kind, &voltage));
        assert!(registry.is_valid(kind, &count));
        assert!(!registry.is_valid(kind, &mode));
        assert!(!registry.is_valid(kind, &untyped_metadata("/a")));
    }
}

#[test]
fn test_default_prefers_avg_for_numeric_parameters() {
    let registry = EngTypeStatRegistry;

    assert_eq!(
        registry.default_stat(Some(&metadata("/a", EngineeringType::Integer))),
        StatKind::Avg
    );
    assert_eq!(
        registry.default_stat(Some(&metadata("/a", EngineeringType::Boolean))),
        StatKind::Count
    );
}

#[test]
fn snapshot_default_for_unknown_metadata() {
    let registry = EngTypeStatRegistry;

    assert_debug_snapshot!(registry.default_stat(None), @"Count");
    assert_debug_snapshot!(registry.default_stat(Some(&untyped_metadata("/a"))), @"Count");
}
