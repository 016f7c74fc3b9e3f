// SPDX-License-Identifier: MPL-2.0
use lens_share::config::{self, Config, CONFIG_FILE};
use lens_share::i18n::fluent::I18n;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_round_trips_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join(CONFIG_FILE);

    let mut original = Config::default();
    original.general.language = Some("fr".to_string());
    original.downloads.directory = Some(PathBuf::from("/tmp/exports"));
    original.downloads.ask_location = true;
    original.network.timeout_secs = 12;
    original.network.max_body_bytes = 1024;

    config::save_to_path(&original, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded, original);
}

#[test]
fn test_invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join(CONFIG_FILE), "[downloads\nask_location = ")
        .expect("Failed to write invalid config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_missing_config_is_silently_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join(CONFIG_FILE);

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("viewer-print"), "Print");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // CLI wins over config.
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}
