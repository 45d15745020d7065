//! Config Loader Tests

use cachewire_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};

#[test]
fn test_defaults_when_no_file_present() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().expect("defaults should load");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.topology.file.is_none());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cachewire.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"

[topology]
file = "topology.toml"
"#,
    )
    .expect("write config");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("file config should load");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.topology.file.as_deref(),
        Some(std::path::Path::new("topology.toml"))
    );
}

#[test]
fn test_env_overrides_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cachewire.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").expect("write config");

    // Unique prefix keeps this test isolated from the real environment
    std::env::set_var("CWTEST_LOGGING_LEVEL", "warn");
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("CWTEST")
        .load()
        .expect("env config should load");
    std::env::remove_var("CWTEST_LOGGING_LEVEL");

    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cachewire.toml");
    std::fs::write(&path, "[logging]\nlevel = \"shouting\"\n").expect("write config");

    let error = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("invalid level must fail");
    assert!(error.to_string().contains("Invalid log level"));
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("saved.toml");

    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "trace".to_string(),
            json_format: true,
        })
        .with_topology_file("caches.toml")
        .build();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save config");

    let restored = loader.load().expect("reload config");
    assert_eq!(restored.logging.level, "trace");
    assert!(restored.logging.json_format);
    assert_eq!(
        restored.topology.file.as_deref(),
        Some(std::path::Path::new("caches.toml"))
    );
}
