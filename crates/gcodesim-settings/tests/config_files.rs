use gcodesim_settings::{Config, ConfigError, CoordinateMode, SettingsError};
use std::path::PathBuf;

#[test]
fn test_save_and_load_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.parser.coordinate_mode = CoordinateMode::Modal;
    config.playback.arc_segments = 128;
    config.add_recent_file(PathBuf::from("cube.gcode"));
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::new();
    config.playback.start_at_end = true;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert!(loaded.playback.start_at_end);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[parser]\ncoordinate_mode = \"modal\"\n").unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.parser.coordinate_mode, CoordinateMode::Modal);
    assert_eq!(loaded.parser.comment_char, ';');
    assert_eq!(loaded.playback, Config::default().playback);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "parser: {}").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
    ));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playback]\narc_segments = 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file(std::path::Path::new("/nonexistent/gcodesim.toml"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
}
