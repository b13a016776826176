//! Configuration loading and validation against real files.

use std::io::Write;

use havoc::config::loader::load_config;
use havoc::config::schema::ChaosConfig;
use havoc::config::validation::Validator;
use havoc::error::ConfigError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file.flush().expect("flush");
    file
}

#[test]
fn loads_a_complete_config_file() {
    let file = write_config(
        r"
chaos:
  enabled: true
  toggle_prefix: chaos.monkey
assaults:
  level: 5
  deterministic: false
  watched_custom_services:
    - org.example.Repo
  watched_custom_services_active: true
toggles:
  chaos.monkey.latency: false
",
    );

    let shared = load_config(file.path()).expect("valid config");
    let config = shared.read().expect("lock");
    assert!(config.chaos.enabled);
    assert_eq!(config.assaults.level, 5);
    assert_eq!(config.toggles.get("chaos.monkey.latency"), Some(&false));
}

#[test]
fn missing_file_is_reported_as_such() {
    let err = load_config(std::path::Path::new("/nonexistent/havoc.yaml"))
        .expect_err("should fail");
    assert!(matches!(err, ConfigError::MissingFile { .. }));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let file = write_config("chaos: [unclosed");
    let err = load_config(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_level_fails_validation_at_load_time() {
    let file = write_config("assaults:\n  level: 0\n");
    let err = load_config(file.path()).expect_err("should fail");
    match err {
        ConfigError::ValidationError { errors, .. } => {
            assert!(errors.iter().any(|issue| issue.path == "assaults.level"));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn blank_watched_service_fails_validation() {
    let file = write_config("assaults:\n  watched_custom_services:\n    - ''\n");
    let err = load_config(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn env_reference_expands_before_parsing() {
    // PATH is always set; expanding it into a prefix proves the
    // substitution runs before the YAML parser sees the text.
    let path = std::env::var("PATH").expect("PATH is set");
    let file = write_config("chaos:\n  toggle_prefix: '${PATH}'\n");
    let shared = load_config(file.path()).expect("valid config");
    assert_eq!(shared.read().expect("lock").chaos.toggle_prefix, path);
}

#[test]
fn env_reference_default_applies_when_unset() {
    let file = write_config("assaults:\n  level: ${HAVOC_IT_UNSET:-3}\n");
    let shared = load_config(file.path()).expect("valid config");
    assert_eq!(shared.read().expect("lock").assaults.level, 3);
}

#[test]
fn validator_warnings_do_not_fail_the_load() {
    // Level above 100 in random mode is legal but useless; the loader
    // logs the warning and still returns the config.
    let file = write_config("assaults:\n  level: 500\n");
    let shared = load_config(file.path()).expect("valid config");
    assert_eq!(shared.read().expect("lock").assaults.level, 500);

    let result = Validator::new().validate(&shared.read().expect("lock"));
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn defaults_match_a_freshly_constructed_config() {
    let file = write_config("{}");
    let shared = load_config(file.path()).expect("valid config");
    let loaded = shared.read().expect("lock");
    let fresh = ChaosConfig::default();
    assert_eq!(loaded.chaos.enabled, fresh.chaos.enabled);
    assert_eq!(loaded.assaults.level, fresh.assaults.level);
    assert_eq!(
        loaded.chaos.toggle_prefix,
        fresh.chaos.toggle_prefix
    );
}
