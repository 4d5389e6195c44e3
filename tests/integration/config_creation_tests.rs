//! Tests that a missing config file is created from the default template.

use batwatch::{create_or_get_config, options::config::Config};

#[test]
fn missing_config_file_is_created_with_the_template() {
    let dir = tempfile::tempdir().expect("should create a temp dir");
    let path = dir.path().join("nested").join("batwatch.toml");

    let config = create_or_get_config(&Some(path.clone())).expect("should create the config");
    assert_eq!(config, Config::default());
    assert!(path.exists(), "the template should have been written out");

    // A second load reads the file we just wrote, which must parse cleanly.
    let reread = create_or_get_config(&Some(path)).expect("should re-read the config");
    assert_eq!(reread, Config::default());
}

#[test]
fn no_config_path_yields_the_defaults_without_writing() {
    let config = create_or_get_config(&None).expect("should fall back to defaults");
    assert_eq!(config, Config::default());
}
