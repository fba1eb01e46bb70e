use std::path::{Path, PathBuf};

use oncorisk_cli::config::{LogFormat, OncoriskConfig, load_config, resolve_path, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, OncoriskConfig::default());
    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.model_path.is_none());
}

#[test]
fn save_then_load_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = OncoriskConfig {
        config_version: 0,
        model_path: Some(PathBuf::from("/opt/models/logistic.json")),
        log_level: "debug".to_string(),
        log_format: LogFormat::Json,
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.model_path, config.model_path);
    assert_eq!(loaded.log_format, LogFormat::Json);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "log_level": "warn" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 9 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn oversized_version_is_rejected_not_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 4294967296 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("config_version 4294967296 is newer"));
}

#[test]
fn non_object_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2]").unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn explicit_flag_wins() {
    let flag = Path::new("/tmp/custom.json");
    assert_eq!(resolve_path(Some(flag)).unwrap(), flag);
}
