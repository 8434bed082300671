//! In-process parameter catalog
//!
//! Serves searches from a parameter list held in memory, ranked
//! fzf-style. Backs the CLI's catalog-file mode and the test suite.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use memchr::memmem;
use std::path::Path;

use super::types::{Dictionary, ParameterMetadata, ParameterPage, ParameterSummary};
use super::{Catalog, CatalogError};

/// Catalog over an in-memory parameter list.
///
/// Matching is case-insensitive: substring hits on the qualified name
/// always qualify, everything else falls back to fuzzy matching. Results
/// are ranked by fuzzy score; ties keep catalog order.
pub struct MemoryCatalog {
    parameters: Vec<ParameterMetadata>,
    matcher: SkimMatcherV2,
}

impl std::fmt::Debug for MemoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCatalog")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl MemoryCatalog {
    pub fn new(parameters: Vec<ParameterMetadata>) -> Self {
        MemoryCatalog {
            parameters,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Load a catalog from a JSON file holding an array of parameter
    /// records.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let parameters: Vec<ParameterMetadata> = serde_json::from_str(&raw)?;
        log::debug!(
            "loaded {} parameters from {}",
            parameters.len(),
            path.display()
        );
        Ok(Self::new(parameters))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Matching entries, best first. Stable sort keeps catalog order for
    /// equal scores.
    fn rank(&self, q: &str) -> Vec<&ParameterMetadata> {
        let needle = q.to_lowercase();
        let finder = memmem::Finder::new(needle.as_bytes());
        let mut hits: Vec<(i64, &ParameterMetadata)> = Vec::new();
        for info in &self.parameters {
            let haystack = info.qualified_name.to_lowercase();
            let score = self.matcher.fuzzy_match(&info.qualified_name, q);
            if finder.find(haystack.as_bytes()).is_some() {
                hits.push((score.unwrap_or(0), info));
            } else if let Some(score) = score {
                hits.push((score, info));
            }
        }
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        hits.into_iter().map(|(_, info)| info).collect()
    }
}

impl Catalog for MemoryCatalog {
    async fn search_parameters(
        &self,
        q: &str,
        limit: usize,
    ) -> Result<ParameterPage, CatalogError> {
        let parameters: Vec<ParameterSummary> = if q.is_empty() {
            self.parameters
                .iter()
                .take(limit)
                .map(ParameterMetadata::summary)
                .collect()
        } else {
            self.rank(q)
                .into_iter()
                .take(limit)
                .map(ParameterMetadata::summary)
                .collect()
        };
        Ok(ParameterPage {
            parameters,
            continuation_token: None,
        })
    }

    async fn load_dictionary(&self) -> Result<Dictionary, CatalogError> {
        Ok(Dictionary::new(self.parameters.iter().cloned()))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
