//! Tests for loading the driver configuration.

use std::io::Write;
use tictactoe_cli::{CliConfig, SinkKind};
use tictactoe_engine::Player;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_without_file() {
    let config = CliConfig::load(None).expect("defaults");
    assert_eq!(*config.first_player(), Player::X);
    assert_eq!(*config.audit_sink(), SinkKind::Tracing);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
first_player = "O"
audit_sink = "stderr"
log_filter = "debug,audit=info"
"#,
    );
    let config = CliConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(*config.audit_sink(), SinkKind::Stderr);
    assert_eq!(config.log_filter(), "debug,audit=info");
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("audit_sink = \"none\"\n");
    let config = CliConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.first_player(), Player::X);
    assert_eq!(*config.audit_sink(), SinkKind::None);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_invalid_player_is_parse_error() {
    let file = write_config("first_player = \"Z\"\n");
    let err = CliConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = CliConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}
