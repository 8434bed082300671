//! HTTP parameter catalog
//!
//! Client for the telemetry archive's REST interface:
//! `GET {base}/api/mdb/parameters/{instance}` with `q` and `limit` for
//! incremental search, and a paginated sweep of the same resource to
//! build the full dictionary. The dictionary is fetched once and cached
//! for the lifetime of the client.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use super::types::{Dictionary, ParameterMetadata, ParameterPage};
use super::{Catalog, CatalogError};

/// Page size used while sweeping the dictionary
const DICTIONARY_PAGE_SIZE: usize = 500;

/// Dictionary pages carry full metadata records
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataPage {
    #[serde(default)]
    parameters: Vec<ParameterMetadata>,
    #[serde(default)]
    continuation_token: Option<String>,
}

pub struct RestCatalog {
    client: Client,
    base_url: String,
    instance: String,
    dictionary: OnceCell<Dictionary>,
}

impl RestCatalog {
    pub fn new(base_url: impl Into<String>, instance: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        RestCatalog {
            client: Client::new(),
            base_url,
            instance: instance.into(),
            dictionary: OnceCell::new(),
        }
    }

    fn parameters_url(&self) -> String {
        format!("{}/api/mdb/parameters/{}", self.base_url, self.instance)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(self.parameters_url())
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Sweep every dictionary page, following continuation tokens
    async fn fetch_dictionary(&self) -> Result<Dictionary, CatalogError> {
        let mut entries: Vec<ParameterMetadata> = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let mut query = vec![
                ("details", "true".to_string()),
                ("limit", DICTIONARY_PAGE_SIZE.to_string()),
            ];
            if let Some(next) = &token {
                query.push(("next", next.clone()));
            }
            let page: MetadataPage = self.get_json(&query).await?;
            entries.extend(page.parameters);
            match page.continuation_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        log::debug!("dictionary loaded: {} parameters", entries.len());
        Ok(Dictionary::new(entries))
    }
}

impl Catalog for RestCatalog {
    async fn search_parameters(
        &self,
        q: &str,
        limit: usize,
    ) -> Result<ParameterPage, CatalogError> {
        let query = [("q", q.to_string()), ("limit", limit.to_string())];
        self.get_json(&query).await
    }

    async fn load_dictionary(&self) -> Result<Dictionary, CatalogError> {
        let dictionary = self
            .dictionary
            .get_or_try_init(|| self.fetch_dictionary())
            .await?;
        Ok(dictionary.clone())
    }
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod rest_tests;
