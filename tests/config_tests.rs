use std::fs;

use table_shuffle::config::{LogFormat, StaticConfig};
use table_shuffle::errors::TableShuffleError;
use table_shuffle::runtime::modes::generate_config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_defaults() {
    let config = StaticConfig::default();
    assert_eq!(config.screen.title, "Task 4");
    assert_eq!(config.screen.shuffle_label, "Shuffle");
    assert_eq!(config.screen.max_value, 30);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.logging.file.as_deref(), Some("table-shuffle.log"));
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[screen]
title = "Numbers"
max_value = 9

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = StaticConfig::try_load(&path).unwrap();
    assert_eq!(config.screen.title, "Numbers");
    assert_eq!(config.screen.max_value, 9);
    // 未指定的字段使用默认值
    assert_eq!(config.screen.shuffle_label, "Shuffle");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = StaticConfig::try_load(&path.to_string_lossy()).unwrap();
    assert_eq!(config, StaticConfig::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[screen]\nmax_value = 99999\n");

    let err = StaticConfig::try_load(&path).unwrap_err();
    assert!(matches!(err, TableShuffleError::Validation(_)));
    assert!(err.message().contains("max_value"));

    // load() 回退到默认值
    assert_eq!(StaticConfig::load(Some(path.as_str())), StaticConfig::default());
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[screen\ntitle = ");

    let err = StaticConfig::try_load(&path).unwrap_err();
    assert_eq!(err.code(), "E001");
}

#[test]
fn test_sample_config_round_trip() {
    let sample = StaticConfig::generate_sample_config().unwrap();
    assert!(sample.contains("[screen]"));
    assert!(sample.contains("title = \"Task 4\""));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    StaticConfig::default().save_to_file(&path).unwrap();

    let loaded = StaticConfig::try_load(&path.to_string_lossy()).unwrap();
    assert_eq!(loaded, StaticConfig::default());
}

#[test]
fn test_save_below_regular_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let err = StaticConfig::default()
        .save_to_file(blocker.join("config.toml"))
        .unwrap_err();
    assert_eq!(err.code(), "E001");
    assert!(matches!(err, TableShuffleError::Config(_)));
    assert!(err.message().contains("config.toml"));
}

#[test]
fn test_generate_config_reports_write_failure_as_config_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let output = blocker.join("config.toml");

    let err = generate_config(Some(&output.to_string_lossy())).unwrap_err();
    assert_eq!(err.code(), "E001");
}
