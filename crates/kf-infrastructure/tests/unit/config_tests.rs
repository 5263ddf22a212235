//! Configuration Loader Tests

use kf_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
use kf_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new().with_log_level("debug").build();
    assert_eq!(config.logging.level, "debug");

    let logging = LoggingConfig {
        json_format: true,
        ..LoggingConfig::default()
    };
    let config = ConfigBuilder::new().with_logging(logging).build();
    assert!(config.logging.json_format);
}

#[test]
fn test_config_loads_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kf.toml");
    let expected = ConfigBuilder::new().with_log_level("warn").build();
    std::fs::write(&config_path, toml::to_string_pretty(&expected).unwrap()).unwrap();

    let loaded = ConfigLoader::new()
        .with_env_prefix("KF_TEST_EXPLICIT_FILE")
        .with_config_path(&config_path)
        .load()
        .unwrap();
    assert_eq!(loaded, expected);
}

#[test]
fn test_without_path_only_defaults_and_env_apply() {
    let loader = ConfigLoader::new().with_env_prefix("KF_TEST_NO_PATH");
    assert!(loader.config_path().is_none());
    assert_eq!(loader.load().unwrap(), AppConfig::default());
}

#[test]
fn test_env_nested_keys_split_on_double_underscore() {
    // SAFETY: no other test reads or writes variables under this prefix, and
    // only std accessors touch the environment in this binary
    unsafe {
        std::env::set_var("KF_TEST_ENV_SPLIT_LOGGING__LEVEL", "debug");
        std::env::set_var("KF_TEST_ENV_SPLIT_LOGGING__JSON_FORMAT", "true");
    }

    let loaded = ConfigLoader::new().with_env_prefix("KF_TEST_ENV_SPLIT").load();

    // SAFETY: see above
    unsafe {
        std::env::remove_var("KF_TEST_ENV_SPLIT_LOGGING__LEVEL");
        std::env::remove_var("KF_TEST_ENV_SPLIT_LOGGING__JSON_FORMAT");
    }

    let config = loaded.unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_config_rejects_invalid_level() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kf.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let result = ConfigLoader::new()
        .with_env_prefix("KF_TEST_INVALID")
        .with_config_path(&config_path)
        .load();
    assert!(result.is_err());
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new()
        .with_env_prefix("KF_TEST_MISSING")
        .with_config_path(temp_dir.path().join("absent.toml"));

    assert_eq!(loader.config_path(), Some(temp_dir.path().join("absent.toml").as_path()));
    let config = loader.load().unwrap();
    assert_eq!(config, AppConfig::default());
}
