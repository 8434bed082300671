// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

use crate::debounce::DEFAULT_WINDOW;
use crate::suggest::{OPTIONS_LIMIT, SUGGEST_LIMIT};

/// Search behavior section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Quiet window between keystroke bursts, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Result limit for grouped typeahead suggestions
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
    /// Result limit for the flat options list
    #[serde(default = "default_options_limit")]
    pub options_limit: usize,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_WINDOW.as_millis() as u64
}

fn default_suggest_limit() -> usize {
    SUGGEST_LIMIT
}

fn default_options_limit() -> usize {
    OPTIONS_LIMIT
}

impl SearchConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            suggest_limit: default_suggest_limit(),
            options_limit: default_options_limit(),
        }
    }
}

/// REST catalog connection section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the archive's HTTP API, e.g. "http://localhost:8090"
    #[serde(default)]
    pub url: Option<String>,
    /// Instance name the parameter catalog lives under
    #[serde(default)]
    pub instance: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_match_widget_limits() {
        let config = Config::default();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.suggest_limit, 15);
        assert_eq!(config.search.options_limit, 20);
        assert!(config.catalog.url.is_none());
    }

    #[test]
    fn test_parses_full_file() {
        let config: Config = toml::from_str(
            r#"
[search]
debounce_ms = 150
suggest_limit = 10
options_limit = 30

[catalog]
url = "http://localhost:8090"
instance = "simulator"
"#,
        )
        .unwrap();
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.debounce_window(), Duration::from_millis(150));
        assert_eq!(config.catalog.url.as_deref(), Some("http://localhost:8090"));
        assert_eq!(config.catalog.instance.as_deref(), Some("simulator"));
    }

    // For any subset of fields present in the search section, parsing
    // succeeds and absent fields keep their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_search_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_debounce in prop::bool::ANY,
            debounce_ms in 1u64..10_000
        ) {
            let toml_content = if !include_section {
                String::new()
            } else if !include_debounce {
                "[search]\n".to_string()
            } else {
                format!("[search]\ndebounce_ms = {}\n", debounce_ms)
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "failed to parse: {:?}", toml_content);
            let config = config.unwrap();

            if include_section && include_debounce {
                prop_assert_eq!(config.search.debounce_ms, debounce_ms);
            } else {
                prop_assert_eq!(config.search.debounce_ms, 300);
            }
            prop_assert_eq!(config.search.suggest_limit, 15);
            prop_assert_eq!(config.search.options_limit, 20);
        }
    }
}
