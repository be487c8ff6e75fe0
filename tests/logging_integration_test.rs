//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so a single
//! test in this binary initializes it.

use labnotes::config::LoggingConfig;
use labnotes::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_writes_json() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("info", &config).unwrap();
    tracing::info!(target: "labnotes", patient_key = "jane_doe", "Notes listed");
    drop(guard);

    assert!(log_path.is_dir());
    let contents: String = std::fs::read_dir(&log_path)
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    let line = contents
        .lines()
        .find(|line| line.contains("Notes listed"))
        .expect("event written to log file");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["fields"]["patient_key"], "jane_doe");
}

#[test]
fn test_invalid_level_rejected() {
    let result = init_logging("loud", &LoggingConfig::default());
    assert!(result.is_err());
}
