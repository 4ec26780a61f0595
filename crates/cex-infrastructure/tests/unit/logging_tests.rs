//! Logging Tests

use cex_infrastructure::constants::DEFAULT_LOG_LEVEL;
use cex_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").ok(), Some(Level::TRACE));
    assert_eq!(parse_log_level("DEBUG").ok(), Some(Level::DEBUG));
    assert_eq!(parse_log_level("info").ok(), Some(Level::INFO));
    assert_eq!(parse_log_level("warning").ok(), Some(Level::WARN));
    assert_eq!(parse_log_level("error").ok(), Some(Level::ERROR));

    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_is_fallible() {
    let invalid = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&invalid).is_err());

    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = LoggingConfig {
        json_format: true,
        file_output: Some(dir.path().join("cex.log")),
        ..LoggingConfig::default()
    };
    // The first call may or may not win the global subscriber; the second never does
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
