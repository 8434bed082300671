//! Configuration loading

pub mod types;

pub use types::{CatalogConfig, Config, SearchConfig};

use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default location. A missing file
    /// yields the defaults; an unreadable or unparseable file is
    /// reported and ignored.
    pub fn load() -> Config {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Config {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("cannot read config {}: {err}", path.display());
                return Config::default();
            }
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring invalid config {}: {err}", path.display());
                Config::default()
            }
        }
    }
}

/// Location of the user config file, when a config directory exists
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("telepick").join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
