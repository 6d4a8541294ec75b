//! UpimConfig のユニットテスト

use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let config = UpimConfig::load_from(&path).unwrap();

    assert_eq!(config.editor_path, None);
    assert_eq!(config.project_path, None);
    assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
}

#[test]
fn load_from_reads_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
editor_path = "/opt/unity/Editor/Unity"
project_path = "/work/MyGame"
poll_interval_ms = 250
"#,
    )
    .unwrap();

    let config = UpimConfig::load_from(&path).unwrap();

    assert_eq!(
        config.editor_path,
        Some(PathBuf::from("/opt/unity/Editor/Unity"))
    );
    assert_eq!(config.project_path, Some(PathBuf::from("/work/MyGame")));
    assert_eq!(config.poll_interval_ms, 250);
}

#[test]
fn load_from_partial_toml_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, r#"editor_path = "/opt/unity/Editor/Unity""#).unwrap();

    let config = UpimConfig::load_from(&path).unwrap();

    assert!(config.editor_path.is_some());
    assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
}

#[test]
fn load_from_invalid_toml_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "poll_interval_ms = \"not a number\"").unwrap();

    assert!(UpimConfig::load_from(&path).is_err());
}

#[test]
#[serial]
fn apply_env_overrides_file_values() {
    std::env::set_var("UPIM_EDITOR", "/env/unity");
    std::env::set_var("UPIM_POLL_INTERVAL_MS", "50");

    let mut config = UpimConfig {
        editor_path: Some(PathBuf::from("/file/unity")),
        project_path: None,
        poll_interval_ms: 200,
    };
    config.apply_env();

    assert_eq!(config.editor_path, Some(PathBuf::from("/env/unity")));
    assert_eq!(config.poll_interval_ms, 50);

    std::env::remove_var("UPIM_EDITOR");
    std::env::remove_var("UPIM_POLL_INTERVAL_MS");
}

#[test]
#[serial]
fn apply_env_ignores_unparsable_interval() {
    std::env::set_var("UPIM_POLL_INTERVAL_MS", "soon");

    let mut config = UpimConfig::default();
    config.apply_env();

    assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);

    std::env::remove_var("UPIM_POLL_INTERVAL_MS");
}

#[test]
fn resolve_project_defaults_to_current_dir() {
    let config = UpimConfig::default();
    assert_eq!(config.resolve_project(), PathBuf::from("."));
}

#[test]
fn resolve_editor_without_path_is_config_error() {
    let config = UpimConfig::default();
    let err = config.resolve_editor().unwrap_err();
    assert!(matches!(err, UpimError::Config(_)));
}
