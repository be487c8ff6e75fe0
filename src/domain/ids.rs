//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for identifiers so they can't be
//! mixed up with free-form strings such as patient names or note bodies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Note identifier newtype wrapper
///
/// A note's identity is its file stem, e.g. `note_jane_doe_20240105_0930`,
/// or `note_jane_doe_20240105_0930_2` for the second note saved within the
/// same minute.
///
/// # Examples
///
/// ```
/// use labnotes::domain::ids::NoteId;
/// use std::str::FromStr;
///
/// let id = NoteId::from_str("note_jane_doe_20240105_0930").unwrap();
/// assert_eq!(id.as_str(), "note_jane_doe_20240105_0930");
/// assert_eq!(id.file_name(), "note_jane_doe_20240105_0930.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub(crate) String);

impl NoteId {
    /// Creates a new NoteId from a file stem
    ///
    /// # Returns
    ///
    /// Returns `Ok(NoteId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Note ID cannot be empty".to_string());
        }
        if id.contains(['/', '\\']) {
            return Err(format!("Note ID cannot contain path separators: {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the note ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the note on disk
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.0)
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
