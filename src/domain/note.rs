//! Clinical note domain model

use super::ids::NoteId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Immutable free-text note attached to a patient
///
/// `date` is the clinically relevant date chosen by the author; `created_at`
/// is the save time recovered from the note's identity (minute precision).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identity derived from patient and save time
    pub id: NoteId,

    /// Patient identifier as written in the note header
    pub patient: String,

    /// Clinically relevant date
    pub date: NaiveDate,

    /// Note body, verbatim
    pub text: String,

    /// Save time, truncated to the minute
    pub created_at: NaiveDateTime,
}
