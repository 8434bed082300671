//! Namespace grouping of catalog search results
//!
//! Typeahead widgets render suggestions in groups. Parameters group by
//! namespace, the qualified name minus its final segment.

use serde::Serialize;

use crate::catalog::ParameterSummary;

/// One typeahead group: all suggested parameters sharing a namespace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionGroup {
    pub namespace: String,
    pub items: Vec<SuggestionItem>,
}

/// One completion entry inside a group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionItem {
    /// Short parameter name shown in the dropdown
    pub label: String,
    /// Lowercased qualified name, what the widget filters against
    pub filter_text: String,
    /// Qualified name inserted on accept
    pub insert_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Namespace of a qualified name: everything before the final '/', or the
/// whole name when it contains none.
pub fn namespace_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('/') {
        Some(idx) => &qualified_name[..idx],
        None => qualified_name,
    }
}

/// Group search results by namespace.
///
/// Groups appear in first-encounter order and items keep their arrival
/// order within each group; nothing is sorted. Pure transform, empty in
/// gives empty out.
pub fn group_by_namespace(parameters: &[ParameterSummary]) -> Vec<SuggestionGroup> {
    let mut groups: Vec<SuggestionGroup> = Vec::new();
    for parameter in parameters {
        let namespace = namespace_of(&parameter.qualified_name);
        let idx = match groups.iter().position(|g| g.namespace == namespace) {
            Some(idx) => idx,
            None => {
                groups.push(SuggestionGroup {
                    namespace: namespace.to_string(),
                    items: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[idx].items.push(SuggestionItem {
            label: parameter.name.clone(),
            filter_text: parameter.qualified_name.to_lowercase(),
            insert_text: parameter.qualified_name.clone(),
            documentation: parameter
                .long_description
                .clone()
                .or_else(|| parameter.short_description.clone()),
        });
    }
    groups
}

#[cfg(test)]
#[path = "grouper_tests.rs"]
mod grouper_tests;
