//! Tests for the REST catalog client

use super::*;
use crate::catalog::ParameterPage;

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let catalog = RestCatalog::new("http://localhost:8090/", "simulator");

    assert_eq!(
        catalog.parameters_url(),
        "http://localhost:8090/api/mdb/parameters/simulator"
    );
}

#[test]
fn test_search_page_decodes_a_service_response() {
    let page: ParameterPage = serde_json::from_str(
        r#"{
            "parameters": [
                {
                    "name": "BatteryVoltage1",
                    "qualifiedName": "/YSS/SIMULATOR/BatteryVoltage1",
                    "type": {"engType": "float"}
                }
            ],
            "continuationToken": "page2"
        }"#,
    )
    .unwrap();

    assert_eq!(page.parameters.len(), 1);
    assert_eq!(page.parameters[0].name, "BatteryVoltage1");
    assert_eq!(page.continuation_token.as_deref(), Some("page2"));
}

#[test]
fn test_metadata_page_decodes_dictionary_records() {
    let page: MetadataPage = serde_json::from_str(
        r#"{
            "parameters": [
                {
                    "name": "Mode",
                    "qualifiedName": "/YSS/SIMULATOR/Mode",
                    "type": {"engType": "enumeration"},
                    "units": null
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(page.parameters[0].qualified_name, "/YSS/SIMULATOR/Mode");
    assert!(page.parameters[0].units.is_none());
    assert!(page.continuation_token.is_none());
}

#[test]
fn test_empty_body_means_last_page() {
    let page: MetadataPage = serde_json::from_str("{}").unwrap();

    assert!(page.parameters.is_empty());
    assert!(page.continuation_token.is_none());
}
