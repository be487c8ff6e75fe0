//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX`.

use labnotes::config::{load_config, load_config_or_default, LabNotesConfig};
use std::io::Write;
use std::sync::Mutex;
use tempfile::{NamedTempFile, TempDir};

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("LABNOTES_APPLICATION_LOG_LEVEL");
    std::env::remove_var("LABNOTES_LAB_DELIMITER");
    std::env::remove_var("LABNOTES_NOTES_DIRECTORY");
    std::env::remove_var("LABNOTES_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("LABNOTES_LOGGING_LOCAL_PATH");
    std::env::remove_var("LABNOTES_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_NOTES_ROOT");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[lab]
delimiter = "\t"

[notes]
directory = "/var/lib/labnotes/notes"

[logging]
local_enabled = true
local_path = "/tmp/labnotes-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.lab.delimiter_byte(), b'\t');
    assert_eq!(config.notes.directory, "/var/lib/labnotes/notes");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[notes]\ndirectory = \"notes\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.lab.delimiter, ",");
    assert_eq!(config.notes.directory, "notes");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_missing_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(load_config(&path).is_err());
    assert_eq!(
        load_config_or_default(&path).unwrap(),
        LabNotesConfig::default()
    );
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_NOTES_ROOT", "/srv/clinic");

    let file = write_config("[notes]\ndirectory = \"${TEST_NOTES_ROOT}/notes\"\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.notes.directory, "/srv/clinic/notes");

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution_missing_var() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[notes]\ndirectory = \"${TEST_NOTES_ROOT}/notes\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_NOTES_ROOT"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("LABNOTES_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("LABNOTES_LAB_DELIMITER", ";");
    std::env::set_var("LABNOTES_NOTES_DIRECTORY", "/override/notes");
    std::env::set_var("LABNOTES_LOGGING_LOCAL_ENABLED", "true");

    let file = write_config("[notes]\ndirectory = \"from-file\"\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.lab.delimiter_byte(), b';');
    assert_eq!(config.notes.directory, "/override/notes");
    assert!(config.logging.local_enabled);

    let dir = TempDir::new().unwrap();
    let defaults = load_config_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(defaults.notes.directory, "/override/notes");

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let bad_level = write_config("[application]\nlog_level = \"verbose\"\n");
    assert!(load_config(bad_level.path()).is_err());

    let bad_delimiter = write_config("[lab]\ndelimiter = \"::\"\n");
    assert!(load_config(bad_delimiter.path()).is_err());

    let bad_toml = write_config("[notes\ndirectory = 1\n");
    let err = load_config(bad_toml.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_invalid_env_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("LABNOTES_LOGGING_LOCAL_ROTATION", "weekly");

    let dir = TempDir::new().unwrap();
    assert!(load_config_or_default(dir.path().join("absent.toml")).is_err());

    cleanup_env_vars();
}
