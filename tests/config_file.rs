use std::io::Write;
use wargcv::config::{ConfigError, DemoConfig, OutputFormat};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_explicit_file() {
    let file = write_config("tail_index = 5\nformat = \"json\"\n");
    let config = DemoConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.tail_index, 5);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn partial_file_keeps_defaults() {
    let file = write_config("tail_index = 0\n");
    let config = DemoConfig::from_file(file.path()).unwrap();
    assert_eq!(config.tail_index, 0);
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = DemoConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("tail_index = \"two\"\n");
    let err = DemoConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid config file"));
}
