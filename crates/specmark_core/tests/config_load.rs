use specmark_core::{load_config, ConfigError, SpecmarkConfig};
use std::fs;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(config, SpecmarkConfig::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("specmark.toml");
    fs::write(
        &path,
        "[logging]\nlevel = \"debug\"\ndir = \"/tmp/specmark-logs\"\n\n[markup]\nindent_width = 4\n",
    )
    .unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.dir.as_deref(), Some("/tmp/specmark-logs"));
    assert_eq!(config.markup.indent_width, 4);

    let mut builder = config.markup.builder("ul").unwrap();
    builder.add_child("li", "x").unwrap();
    assert_eq!(builder.to_markup(), "<ul>\n    <li>\n        x\n    </li>\n</ul>\n");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("specmark.toml");
    fs::write(&path, "[markup]\nindent_width = 0\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.markup.indent_width, 0);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.dir, None);
}

#[test]
fn invalid_values_are_rejected_after_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("specmark.toml");

    fs::write(&path, "[markup]\nindent_width = 64\n").unwrap();
    assert!(matches!(
        load_config(Some(path.as_path())),
        Err(ConfigError::IndentTooWide(64))
    ));

    fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();
    assert!(matches!(
        load_config(Some(path.as_path())),
        Err(ConfigError::InvalidLevel(_))
    ));
}

#[test]
fn malformed_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("specmark.toml");
    fs::write(&path, "[markup]\nindent_width = \"wide\"\n").unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
    assert!(err.to_string().starts_with("failed to load configuration"));
}
