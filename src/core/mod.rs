//! Core business logic for Labnotes.
//!
//! # Modules
//!
//! - [`loader`] - Parse delimited lab files into a [`LabTable`](crate::domain::LabTable)
//! - [`filter`] - Restrict a table to one patient and an inclusive date window
//! - [`alerts`] - Evaluate measurement thresholds
//! - [`trend`] - Build per-measurement date/value series
//! - [`export`] - Write a filtered table back out as delimited text
//! - [`report`] - Run the whole pipeline for one patient
//!
//! # Workflow
//!
//! 1. **Load**: parse the uploaded file, failing on missing columns or bad dates
//! 2. **Filter**: keep one patient's rows inside the date window
//! 3. **Alert**: flag rows whose measurements cross a registered threshold
//! 4. **Trend**: derive one series per measurement present
//! 5. **Export** (optional): write the filtered rows for download
//!
//! # Example
//!
//! ```rust,no_run
//! use labnotes::core::{loader, report::LabReport};
//! use labnotes::domain::{DateRange, MeasurementRegistry};
//! use chrono::NaiveDate;
//!
//! # fn example() -> labnotes::domain::Result<()> {
//! let table = loader::load_path("labs.csv", b',')?;
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! );
//! let report = LabReport::build(&table, "Jane Doe", range, &MeasurementRegistry::clinical());
//! for alert in &report.alerts {
//!     println!("{alert}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod alerts;
pub mod export;
pub mod filter;
pub mod loader;
pub mod report;
pub mod trend;
