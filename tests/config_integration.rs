//! Integration tests for loading and initializing the config file.

use std::fs;

use tempfile::TempDir;
use uvc_scan::config::{Config, ConfigError, OutputFormat};
use uvc_scan::indices::IndexError;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_custom_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[probe]\nindices = [4, 2]\nformat = \"json\"\n\n[log]\nlevel = \"info\"\n",
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.indices().unwrap().as_slice(), &[4, 2]);
    assert_eq!(config.probe.format, OutputFormat::Json);
    assert_eq!(config.log_level().unwrap(), Some(log::LevelFilter::Info));
}

#[test]
fn test_negative_index_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[probe]\nindices = [0, -3]\n").unwrap();

    match Config::load(Some(path.as_path())) {
        Err(ConfigError::Indices(IndexError::Negative(-3))) => (),
        other => panic!("Expected negative index error, got: {:?}", other),
    }
}

#[test]
fn test_empty_indices_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[probe]\nindices = []\n").unwrap();

    assert!(matches!(
        Config::load(Some(path.as_path())),
        Err(ConfigError::Indices(IndexError::Empty))
    ));
}

#[test]
fn test_oversized_index_list_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let indices: Vec<String> = (0..300).map(|i| i.to_string()).collect();
    fs::write(&path, format!("[probe]\nindices = [{}]\n", indices.join(", "))).unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Indices(IndexError::TooMany { count: 300, .. })
    ));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[probe\nindices = ").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_invalid_log_level_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[log]\nlevel = \"chatty\"\n").unwrap();

    assert!(matches!(
        Config::load(Some(path.as_path())),
        Err(ConfigError::LogLevel(_))
    ));
}

#[test]
fn test_init_writes_loadable_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::init(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "# mine\n").unwrap();

    assert!(matches!(
        Config::init(&path),
        Err(ConfigError::AlreadyExists(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}
