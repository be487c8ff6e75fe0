//! Domain models and types for Labnotes.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Lab data** ([`LabRecord`], [`LabTable`], [`DateRange`])
//! - **Measurement registry** ([`MeasurementRegistry`], [`Threshold`])
//! - **Pipeline outputs** ([`Alert`], [`Series`])
//! - **Notes** ([`Note`], [`NoteId`])
//! - **Error types** ([`LabNotesError`], [`LoadError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, LabNotesError>`]:
//!
//! ```rust,no_run
//! use labnotes::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let table = labnotes::core::loader::load_path("labs.csv", b',')?;
//!     println!("{} rows", table.len());
//!     Ok(())
//! }
//! ```

pub mod alert;
pub mod errors;
pub mod ids;
pub mod lab;
pub mod measurement;
pub mod note;
pub mod result;
pub mod series;

// Re-export commonly used types for convenience
pub use alert::Alert;
pub use errors::{LabNotesError, LoadError, StorageError};
pub use ids::NoteId;
pub use lab::{DateRange, LabRecord, LabTable, DATE_COLUMN, PATIENT_COLUMN};
pub use measurement::{Comparison, MeasurementRegistry, MeasurementSpec, Threshold};
pub use note::Note;
pub use result::Result;
pub use series::Series;
