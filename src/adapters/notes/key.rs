//! Note identity derivation
//!
//! A note's identity is `note_<patient-key>_<YYYYMMDD_HHMM>[_<n>]`, where the
//! patient key is the normalized patient name, the stamp is the save time
//! truncated to the minute and `n >= 2` disambiguates notes saved for the
//! same patient within the same minute. The same functions are used to build
//! names on save and to match them on listing.

use crate::domain::ids::NoteId;
use chrono::NaiveDateTime;

/// File name prefix shared by every note
pub const NOTE_PREFIX: &str = "note_";

/// File name extension of every note
pub const NOTE_EXTENSION: &str = ".txt";

/// Save-time stamp layout, fixed width and zero padded
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Highest collision counter tried before giving up
pub const MAX_SEQUENCE: u32 = 999;

/// Normalizes a patient identifier into its file name key
///
/// Lower-cases and maps spaces to `_`. Path separators are mapped too, so a
/// key never escapes the note directory.
///
/// # Examples
///
/// ```
/// use labnotes::adapters::notes::key::normalize_patient;
///
/// assert_eq!(normalize_patient("Jane Doe"), "jane_doe");
/// assert_eq!(normalize_patient("A/B"), "a_b");
/// ```
pub fn normalize_patient(patient: &str) -> String {
    patient
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

/// Derives the identity of a note
///
/// `seq` 1 is the plain name; higher values append `_<seq>`.
pub fn note_key(patient: &str, created_at: NaiveDateTime, seq: u32) -> NoteId {
    let stamp = created_at.format(STAMP_FORMAT);
    let stem = if seq <= 1 {
        format!("{NOTE_PREFIX}{}_{stamp}", normalize_patient(patient))
    } else {
        format!("{NOTE_PREFIX}{}_{stamp}_{seq}", normalize_patient(patient))
    };
    NoteId(stem)
}

/// Components recovered from a note file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    /// Normalized patient key
    pub patient_key: String,

    /// Save time, minute precision
    pub created_at: NaiveDateTime,

    /// Collision counter, 1 for the plain name
    pub seq: u32,
}

/// Parses a note file name, `None` when it doesn't follow the note layout
///
/// Parsing works from the right so patient keys containing `_` or digits
/// round-trip.
pub fn parse_file_name(file_name: &str) -> Option<ParsedKey> {
    let stem = file_name
        .strip_prefix(NOTE_PREFIX)?
        .strip_suffix(NOTE_EXTENSION)?;

    parse_with_sequence(stem).or_else(|| parse_stamped(stem, 1))
}

fn parse_with_sequence(stem: &str) -> Option<ParsedKey> {
    let (rest, seq) = stem.rsplit_once('_')?;
    if seq.is_empty() || seq.len() > 3 || !seq.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let seq: u32 = seq.parse().ok()?;
    if seq < 2 {
        return None;
    }
    parse_stamped(rest, seq)
}

fn parse_stamped(stem: &str, seq: u32) -> Option<ParsedKey> {
    let (rest, time) = stem.rsplit_once('_')?;
    let (patient_key, day) = rest.rsplit_once('_')?;
    if time.len() != 4 || day.len() != 8 || patient_key.is_empty() {
        return None;
    }
    let created_at =
        NaiveDateTime::parse_from_str(&format!("{day}_{time}"), STAMP_FORMAT).ok()?;
    Some(ParsedKey {
        patient_key: patient_key.to_string(),
        created_at,
        seq,
    })
}
