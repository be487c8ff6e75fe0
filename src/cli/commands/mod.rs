//! CLI command implementations
//!
//! Every command returns the process exit code.

pub mod init;
pub mod note;
pub mod patients;
pub mod validate;
pub mod view;

use crate::config::{load_config_or_default, LabNotesConfig};
use crate::core::loader;
use crate::domain::LabNotesError;
use chrono::NaiveDate;

/// Command completed
pub const EXIT_OK: i32 = 0;

/// Configuration, arguments or input file rejected
pub const EXIT_INPUT: i32 = 2;

/// Note storage failed
pub const EXIT_STORAGE: i32 = 3;

/// Anything else
pub const EXIT_FATAL: i32 = 5;

/// Maps an error to the exit code reported for it
pub fn exit_code(err: &LabNotesError) -> i32 {
    match err {
        LabNotesError::MalformedInput(_)
        | LabNotesError::Configuration(_)
        | LabNotesError::Validation(_) => EXIT_INPUT,
        LabNotesError::Storage(_) => EXIT_STORAGE,
        LabNotesError::Serialization(_) | LabNotesError::Io(_) => EXIT_FATAL,
    }
}

/// Prints `err` for the user and returns its exit code
pub(crate) fn report_error(context: &str, err: &LabNotesError) -> i32 {
    crate::log_error_with_context!(err, context);
    eprintln!("❌ {context}");
    eprintln!("   Error: {err}");
    exit_code(err)
}

/// Loads the configuration at `config_path`, reporting failures
///
/// `Err` carries the exit code to return.
pub(crate) fn load_settings(config_path: &str) -> Result<LabNotesConfig, i32> {
    load_config_or_default(config_path)
        .map_err(|e| report_error("Failed to load configuration", &e))
}

/// clap value parser for date arguments
pub(crate) fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    loader::parse_date(value)
        .ok_or_else(|| format!("'{value}' is not a date (expected e.g. 2024-01-31)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoadError, StorageError};

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&LoadError::MissingHeader.into()), EXIT_INPUT);
        assert_eq!(
            exit_code(&LabNotesError::Validation("x".to_string())),
            EXIT_INPUT
        );
        let storage = StorageError::Write {
            path: "p".to_string(),
            message: "denied".to_string(),
        };
        assert_eq!(exit_code(&storage.into()), EXIT_STORAGE);
        assert_eq!(exit_code(&LabNotesError::Io("x".to_string())), EXIT_FATAL);
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert!(parse_date_arg("2024-02-30").is_err());
    }
}
