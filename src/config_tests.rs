//! Tests for configuration loading

use super::*;
use std::io::Write;

#[test]
fn test_load_from_reads_a_valid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[search]\ndebounce_ms = 100\n").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config.search.debounce_ms, 100);
    assert_eq!(config.search.suggest_limit, 15);
}

#[test]
fn test_unparseable_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "debounce_ms = [not toml").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config.search.debounce_ms, 300);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_from(&dir.path().join("nope.toml"));

    assert_eq!(config.search.suggest_limit, 15);
    assert_eq!(config.search.options_limit, 20);
}

#[test]
fn test_config_path_points_into_the_app_directory() {
    if let Some(path) = config_path() {
        assert!(path.ends_with("telepick/config.toml"));
    }
}
