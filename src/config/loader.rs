//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LabNotesConfig;
use crate::domain::errors::LabNotesError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LabNotesConfig
/// 4. Applies environment variable overrides (LABNOTES_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use labnotes::config::loader::load_config;
///
/// let config = load_config("labnotes.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LabNotesConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LabNotesError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LabNotesError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: LabNotesConfig = toml::from_str(&contents)
        .map_err(|e| LabNotesError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration, using defaults when the file doesn't exist
///
/// Every command can run without a config file; a file that exists but is
/// invalid is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<LabNotesConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }
    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    finish(LabNotesConfig::default())
}

fn finish(mut config: LabNotesConfig) -> Result<LabNotesConfig> {
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LabNotesError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| LabNotesError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LabNotesError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LABNOTES_* prefix
///
/// Environment variables follow the pattern: LABNOTES_<SECTION>_<KEY>
/// For example: LABNOTES_NOTES_DIRECTORY, LABNOTES_LAB_DELIMITER
fn apply_env_overrides(config: &mut LabNotesConfig) {
    if let Ok(val) = std::env::var("LABNOTES_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("LABNOTES_LAB_DELIMITER") {
        config.lab.delimiter = val;
    }

    if let Ok(val) = std::env::var("LABNOTES_NOTES_DIRECTORY") {
        config.notes.directory = val;
    }

    if let Ok(val) = std::env::var("LABNOTES_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LABNOTES_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("LABNOTES_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
