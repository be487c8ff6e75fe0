//! Domain error types
//!
//! This module defines the error hierarchy for Labnotes.
//! All errors are domain-specific and don't expose third-party types.
//!
//! Absence (no matching rows, no alerts, no notes) is never an error; it is
//! represented by empty results throughout the crate.

use thiserror::Error;

/// Main Labnotes error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LabNotesError {
    /// Uploaded table is missing required columns or has unparseable dates
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] LoadError),

    /// Note persistence failures
    #[error("Note storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors outside of note storage
    #[error("I/O error: {0}")]
    Io(String),
}

/// Table loading errors
///
/// Every variant is fatal to the table being loaded; the caller must supply
/// a corrected file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The header row is missing a required column
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A `Date` cell could not be parsed as a calendar date
    #[error("row {row}: cannot parse '{value}' as a date")]
    UnparseableDate { row: usize, value: String },

    /// The file has no header row at all
    #[error("input has no header row")]
    MissingHeader,

    /// The delimited reader rejected the input
    #[error("row {row}: {message}")]
    Format { row: usize, message: String },
}

/// Note store errors
///
/// Raised only for genuine I/O failures. No operation retries automatically.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The note directory could not be created
    #[error("failed to create note directory {path}: {message}")]
    CreateDirectory { path: String, message: String },

    /// A note file could not be written
    #[error("failed to write note {path}: {message}")]
    Write { path: String, message: String },

    /// The note directory could not be read
    #[error("failed to read note directory {path}: {message}")]
    Read { path: String, message: String },

    /// Collision counter exhausted for a single patient and minute
    #[error("too many notes for '{key}' within one minute")]
    CollisionLimit { key: String },
}

impl StorageError {
    /// Whether this failure happened while persisting a note
    pub fn is_write(&self) -> bool {
        !matches!(self, StorageError::Read { .. })
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for LabNotesError {
    fn from(err: std::io::Error) -> Self {
        LabNotesError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LabNotesError {
    fn from(err: serde_json::Error) -> Self {
        LabNotesError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LabNotesError {
    fn from(err: toml::de::Error) -> Self {
        LabNotesError::Configuration(format!("TOML parse error: {err}"))
    }
}
