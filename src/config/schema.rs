//! Configuration schema types
//!
//! This module defines the configuration structure for Labnotes. Every
//! section and field has a default, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Main Labnotes configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabNotesConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Lab table input settings
    #[serde(default)]
    pub lab: LabConfig,

    /// Note store settings
    #[serde(default)]
    pub notes: NotesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LabNotesConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.lab.validate()?;
        self.notes.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Lab table input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Field delimiter of uploaded and exported tables
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl LabConfig {
    fn validate(&self) -> Result<(), String> {
        if self.delimiter.len() != 1 || !self.delimiter.is_ascii() {
            return Err(format!(
                "lab.delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ));
        }
        if matches!(self.delimiter.as_str(), "\"" | "\n" | "\r") {
            return Err(format!(
                "lab.delimiter cannot be {:?}",
                self.delimiter
            ));
        }
        Ok(())
    }

    /// Delimiter as a byte, falling back to `,` for an invalid value
    pub fn delimiter_byte(&self) -> u8 {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => b',',
        }
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Note store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Directory holding one file per note
    #[serde(default = "default_notes_directory")]
    pub directory: String,
}

impl NotesConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("notes.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            directory: default_notes_directory(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_notes_directory() -> String {
    "patient_notes".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };

        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lab_config_validation() {
        let mut config = LabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte(), b',');

        config.delimiter = ";".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte(), b';');

        config.delimiter = ",,".to_string();
        assert!(config.validate().is_err());

        config.delimiter = "\"".to_string();
        assert!(config.validate().is_err());

        config.delimiter = "é".to_string();
        assert!(config.validate().is_err());
        assert_eq!(config.delimiter_byte(), b',');
    }

    #[test]
    fn test_notes_config_validation() {
        let mut config = NotesConfig::default();
        assert!(config.validate().is_ok());

        config.directory = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: LabNotesConfig = toml::from_str("").unwrap();
        assert_eq!(config, LabNotesConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_delimiter(), ",");
        assert_eq!(default_notes_directory(), "patient_notes");
        assert_eq!(default_local_rotation(), "daily");
    }
}
