//! Tests for catalog data records

use super::*;
use crate::test_utils::test_helpers::metadata;

#[test]
fn test_engineering_type_displays_uppercase() {
    assert_eq!(EngineeringType::Float.to_string(), "FLOAT");
    assert_eq!(EngineeringType::Enumeration.to_string(), "ENUMERATION");
}

#[test]
fn test_unknown_engineering_types_fall_back() {
    let info: ParameterTypeInfo = serde_json::from_str(r#"{"engType": "hexdump"}"#).unwrap();

    assert_eq!(info.eng_type, EngineeringType::Unknown);
    assert!(!info.eng_type.is_numeric());
}

#[test]
fn test_float_and_integer_are_the_numeric_types() {
    assert!(EngineeringType::Float.is_numeric());
    assert!(EngineeringType::Integer.is_numeric());
    assert!(!EngineeringType::String.is_numeric());
    assert!(!EngineeringType::Time.is_numeric());
}

#[test]
fn test_summary_without_optional_fields_decodes() {
    let summary: ParameterSummary =
        serde_json::from_str(r#"{"name": "Mode", "qualifiedName": "/YSS/Mode"}"#).unwrap();

    assert_eq!(summary.name, "Mode");
    assert!(summary.parameter_type.is_none());
    assert!(summary.short_description.is_none());
}

#[test]
fn test_metadata_exposes_its_search_view() {
    let info = metadata("/YSS/SIMULATOR/BatteryVoltage1", EngineeringType::Float);

    let summary = info.summary();

    assert_eq!(summary.qualified_name, info.qualified_name);
    assert_eq!(summary.name, "BatteryVoltage1");
    assert_eq!(
        summary.parameter_type.unwrap().eng_type,
        EngineeringType::Float
    );
}

#[test]
fn test_missing_parameters_field_means_empty_page() {
    let page: ParameterPage = serde_json::from_str("{}").unwrap();

    assert!(page.parameters.is_empty());
    assert!(page.continuation_token.is_none());
}

#[test]
fn test_dictionary_looks_up_by_qualified_name() {
    let dictionary = Dictionary::new(vec![metadata("/a/b", EngineeringType::Float)]);

    assert_eq!(dictionary.len(), 1);
    assert!(!dictionary.is_empty());
    assert!(dictionary.get_parameter_info("/a/b").unwrap().is_numeric());
    assert!(dictionary.get_parameter_info("/a/missing").is_none());
}
