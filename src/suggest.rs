pub mod grouper;
pub mod provider;

// Re-export public types
pub use grouper::{SuggestionGroup, SuggestionItem, group_by_namespace, namespace_of};
pub use provider::{OPTIONS_LIMIT, SUGGEST_LIMIT, SelectableOption, SuggestionProvider};
