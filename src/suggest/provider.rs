//! Search façades for the two consuming widgets
//!
//! The typeahead wants grouped completion items; plain selector widgets
//! want a flat option list. Both are the same catalog search with
//! different limits and shapes.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogError};

use super::grouper::{SuggestionGroup, group_by_namespace};

/// Result limit for grouped typeahead suggestions
pub const SUGGEST_LIMIT: usize = 15;

/// Result limit for the flat options list
pub const OPTIONS_LIMIT: usize = 20;

/// Flat entry for selector widgets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectableOption {
    pub label: String,
    pub value: String,
    /// Uppercased engineering type, when the parameter declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Suggestion source over a catalog.
///
/// Collaborator failures propagate to the caller; there is no retry. An
/// empty search response yields empty output.
pub struct SuggestionProvider<C> {
    catalog: C,
    suggest_limit: usize,
    options_limit: usize,
}

impl<C: Catalog> SuggestionProvider<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_limits(catalog, SUGGEST_LIMIT, OPTIONS_LIMIT)
    }

    pub fn with_limits(catalog: C, suggest_limit: usize, options_limit: usize) -> Self {
        SuggestionProvider {
            catalog,
            suggest_limit,
            options_limit,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Grouped completion items for the typeahead widget
    pub async fn suggest(&self, input: &str) -> Result<Vec<SuggestionGroup>, CatalogError> {
        let page = self
            .catalog
            .search_parameters(input, self.suggest_limit)
            .await?;
        Ok(group_by_namespace(&page.parameters))
    }

    /// Flat options for selector widgets
    pub async fn options(&self, input: &str) -> Result<Vec<SelectableOption>, CatalogError> {
        let page = self
            .catalog
            .search_parameters(input, self.options_limit)
            .await?;
        Ok(page
            .parameters
            .into_iter()
            .map(|parameter| SelectableOption {
                label: parameter.qualified_name.clone(),
                value: parameter.qualified_name,
                description: parameter.parameter_type.map(|t| t.eng_type.to_string()),
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
