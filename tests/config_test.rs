//! Configuration loading tests

use formput::config::{Config, ConfigError};
use formput::upload::OutputKind;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
endpoint: http://localhost:34567/api/v1/recordings/livevideo
timeout_secs: 10
upload:
  file: sample.mp4
  destination: test6
  output: webm
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(
        config.endpoint,
        "http://localhost:34567/api/v1/recordings/livevideo"
    );
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert_eq!(config.upload.file, Path::new("sample.mp4"));
    assert_eq!(config.upload.destination, "test6");
    assert_eq!(config.upload.output, OutputKind::Webm);
}

#[test]
fn test_defaults_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
endpoint: http://localhost:34567/api/v1/recordings/livevideo
upload:
  file: sample.mp4
  destination: test6
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.upload.output, OutputKind::Mp4);
}

#[test]
fn test_env_expansion_in_endpoint() {
    std::env::set_var("FORMPUT_CONFIG_TEST_PORT", "34567");
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
endpoint: http://localhost:${FORMPUT_CONFIG_TEST_PORT}/api
upload:
  file: sample.mp4
  destination: test6
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.endpoint, "http://localhost:34567/api");
    std::env::remove_var("FORMPUT_CONFIG_TEST_PORT");
}

#[test]
fn test_env_default_used_when_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
endpoint: ${FORMPUT_CONFIG_TEST_UNSET:-http://localhost:9000}/api
upload:
  file: sample.mp4
  destination: test6
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.endpoint, "http://localhost:9000/api");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load("/no/such/config.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "endpoint: [unterminated");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_invalid_endpoint_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
endpoint: localhost:34567/api
upload:
  file: sample.mp4
  destination: test6
"#,
    );

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn test_unknown_output_kind_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
endpoint: http://localhost:34567/api
upload:
  file: sample.mp4
  destination: test6
  output: avi
"#,
    );

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}
