//! File-backed note store
//!
//! One plain-text file per note inside a single directory. The store holds
//! no cache: every `list` reads the directory, so concurrent sessions see
//! each other's notes. Files are created with exclusive-create semantics and
//! are never rewritten.

use super::key::{normalize_patient, note_key, parse_file_name, MAX_SEQUENCE};
use crate::domain::errors::{LabNotesError, StorageError};
use crate::domain::ids::NoteId;
use crate::domain::note::Note;
use crate::domain::result::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const PATIENT_HEADER: &str = "Patient: ";
const DATE_HEADER: &str = "Date: ";

/// Storage contract for clinical notes
///
/// Notes are write-once; there is deliberately no update or delete.
pub trait NoteRepository {
    /// Persists a new note and returns its identity
    ///
    /// # Errors
    ///
    /// Returns [`LabNotesError::Validation`] for an empty or multi-line
    /// patient identifier and [`LabNotesError::Storage`] on I/O failure.
    fn save(&self, patient: &str, note_date: NaiveDate, text: &str) -> Result<NoteId>;

    /// Returns every note of `patient`, newest first
    ///
    /// # Errors
    ///
    /// Returns [`LabNotesError::Storage`] when the store can't be read. No
    /// notes is an empty list, not an error.
    fn list(&self, patient: &str) -> Result<Vec<Note>>;
}

/// Note store over a directory of `note_*.txt` files
#[derive(Debug, Clone)]
pub struct FileNoteStore {
    directory: PathBuf,
}

impl FileNoteStore {
    /// Creates a store rooted at `directory`
    ///
    /// The directory is created lazily on the first save.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the note files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Persists a note stamped with an explicit save time
    ///
    /// `created_at` is truncated to the minute. When a note for the same
    /// patient and minute already exists the next free counter suffix is
    /// used, so a save never overwrites.
    pub fn save_at(
        &self,
        patient: &str,
        note_date: NaiveDate,
        text: &str,
        created_at: NaiveDateTime,
    ) -> Result<NoteId> {
        validate_patient(patient)?;
        let created_at = truncate_to_minute(created_at);

        fs::create_dir_all(&self.directory).map_err(|e| StorageError::CreateDirectory {
            path: self.directory.display().to_string(),
            message: e.to_string(),
        })?;

        let body = render_body(patient, note_date, text);

        for seq in 1..=MAX_SEQUENCE {
            let id = note_key(patient, created_at, seq);
            let path = self.directory.join(id.file_name());

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(note_id = %id, "Note name taken, trying next counter");
                    continue;
                }
                Err(e) => return Err(write_error(&path, e)),
            };

            if let Err(e) = file.write_all(body.as_bytes()).and_then(|_| file.sync_all()) {
                // A half-written note would be listed later; drop it.
                let _ = fs::remove_file(&path);
                return Err(write_error(&path, e));
            }

            tracing::info!(note_id = %id, note_date = %note_date, "Note saved");
            return Ok(id);
        }

        Err(StorageError::CollisionLimit {
            key: note_key(patient, created_at, 1).into_inner(),
        }
        .into())
    }

    fn read_note(&self, path: &Path, id: NoteId, created_at: NaiveDateTime) -> Option<Note> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable note");
                return None;
            }
        };
        match parse_body(&content) {
            Some((patient, date, text)) => Some(Note {
                id,
                patient,
                date,
                text,
                created_at,
            }),
            None => {
                tracing::warn!(path = %path.display(), "Skipping note without Patient/Date header");
                None
            }
        }
    }
}

impl NoteRepository for FileNoteStore {
    fn save(&self, patient: &str, note_date: NaiveDate, text: &str) -> Result<NoteId> {
        self.save_at(patient, note_date, text, Local::now().naive_local())
    }

    fn list(&self, patient: &str) -> Result<Vec<Note>> {
        let wanted = normalize_patient(patient);

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.directory.display().to_string(),
                    message: e.to_string(),
                }
                .into())
            }
        };

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::Read {
                path: self.directory.display().to_string(),
                message: e.to_string(),
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(parsed) = parse_file_name(name) else {
                continue;
            };
            if parsed.patient_key != wanted {
                continue;
            }
            let stem = &name[..name.len() - super::key::NOTE_EXTENSION.len()];
            let id = NoteId(stem.to_string());
            if let Some(note) = self.read_note(&entry.path(), id, parsed.created_at) {
                found.push((parsed.created_at, parsed.seq, note));
            }
        }

        found.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)).then_with(|| b.2.id.cmp(&a.2.id)));

        tracing::info!(patient_key = %wanted, count = found.len(), "Notes listed");
        Ok(found.into_iter().map(|(_, _, note)| note).collect())
    }
}

fn validate_patient(patient: &str) -> Result<()> {
    if patient.trim().is_empty() {
        return Err(LabNotesError::Validation(
            "patient identifier cannot be empty".to_string(),
        ));
    }
    if patient.contains(['\n', '\r']) {
        return Err(LabNotesError::Validation(
            "patient identifier cannot span multiple lines".to_string(),
        ));
    }
    Ok(())
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

fn render_body(patient: &str, note_date: NaiveDate, text: &str) -> String {
    format!(
        "{PATIENT_HEADER}{patient}\n{DATE_HEADER}{}\n\n{text}",
        note_date.format("%Y-%m-%d")
    )
}

fn parse_body(content: &str) -> Option<(String, NaiveDate, String)> {
    let (patient_line, rest) = content.split_once('\n')?;
    let (date_line, rest) = rest.split_once('\n')?;
    let patient = patient_line.trim_end_matches('\r').strip_prefix(PATIENT_HEADER)?;
    let date = date_line.trim_end_matches('\r').strip_prefix(DATE_HEADER)?;
    let date = crate::core::loader::parse_date(date)?;
    let text = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);
    Some((patient.to_string(), date, text.to_string()))
}

fn write_error(path: &Path, err: std::io::Error) -> LabNotesError {
    StorageError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_body_layout() {
        assert_eq!(
            render_body("Jane Doe", day(5), "Feeling better.\nNo fever."),
            "Patient: Jane Doe\nDate: 2024-01-05\n\nFeeling better.\nNo fever."
        );
    }

    #[test]
    fn test_parse_body_round_trip() {
        let body = render_body("Jane Doe", day(5), "\nleading blank line kept");
        let (patient, date, text) = parse_body(&body).unwrap();
        assert_eq!(patient, "Jane Doe");
        assert_eq!(date, day(5));
        assert_eq!(text, "\nleading blank line kept");
    }

    #[test]
    fn test_parse_body_rejects_missing_header() {
        assert_eq!(parse_body("just some text\nmore\n\nbody"), None);
    }

    #[test]
    fn test_save_truncates_to_minute() {
        let dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(dir.path().join("notes"));
        let id = store
            .save_at("Jane Doe", day(5), "hello", at(6, 14, 3, 59))
            .unwrap();
        assert_eq!(id.as_str(), "note_jane_doe_20240106_1403");
        let notes = store.list("Jane Doe").unwrap();
        assert_eq!(notes[0].created_at, at(6, 14, 3, 0));
    }

    #[test]
    fn test_save_rejects_blank_patient() {
        let dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(dir.path());
        let err = store.save_at("  ", day(1), "x", at(1, 0, 0, 0)).unwrap_err();
        assert!(matches!(err, LabNotesError::Validation(_)));
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(dir.path().join("never-created"));
        assert!(store.list("Jane Doe").unwrap().is_empty());
    }

    #[test]
    fn test_list_skips_corrupt_files() {
        let dir = TempDir::new().unwrap();
        let store = FileNoteStore::new(dir.path());
        store.save_at("Jane Doe", day(1), "ok", at(1, 9, 0, 0)).unwrap();
        fs::write(
            dir.path().join("note_jane_doe_20240102_0900.txt"),
            "no header here",
        )
        .unwrap();
        let notes = store.list("Jane Doe").unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "ok");
    }
}
