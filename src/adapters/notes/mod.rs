//! Per-patient clinical note persistence
//!
//! Notes live as one plain-text file each in a single directory:
//!
//! ```text
//! patient_notes/
//!   note_jane_doe_20240105_0930.txt
//!   note_jane_doe_20240105_0930_2.txt   <- second save in the same minute
//!   note_john_roe_20240106_1100.txt
//! ```
//!
//! Each file holds a `Patient:` line, a `Date:` line, a blank line and the
//! note text verbatim.
//!
//! ```rust,no_run
//! use labnotes::adapters::notes::{FileNoteStore, NoteRepository};
//! use chrono::NaiveDate;
//!
//! # fn example() -> labnotes::domain::Result<()> {
//! let store = FileNoteStore::new("patient_notes");
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! store.save("Jane Doe", date, "Hb trending up, continue iron.")?;
//!
//! for note in store.list("Jane Doe")? {
//!     println!("{} {}", note.id, note.date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod key;
pub mod store;

pub use key::{normalize_patient, note_key};
pub use store::{FileNoteStore, NoteRepository};
