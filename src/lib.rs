// Labnotes - Lab trend viewer and clinical note keeper
// Copyright (c) 2025 Labnotes Contributors
// Licensed under the MIT License

//! # Labnotes - lab trends, alerts and clinical notes
//!
//! Labnotes loads a delimited table of lab measurements for many patients,
//! narrows it to one patient and date window, flags values that cross
//! clinical thresholds, derives trend series for display and keeps free-text
//! clinical notes per patient on disk.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline stages (load, filter, alerts, trends, export)
//! - [`adapters`] - File-backed note store
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use labnotes::core::{alerts, filter, loader, trend};
//! use labnotes::domain::MeasurementRegistry;
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let csv = b"Patient,Date,Hb\nJane Doe,2024-01-01,9.2\nJane Doe,2024-01-05,11.0\n";
//! let table = loader::load(csv, b',')?;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let rows = filter::filter(&table, "Jane Doe", start, end);
//!
//! let registry = MeasurementRegistry::clinical();
//! let found = alerts::evaluate(&rows, &registry);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].to_string(), "Hb 9.2 on 2024-01-01 is low.");
//!
//! let series = trend::build(&rows, "Hb", registry.threshold("Hb").map(|t| t.bound));
//! assert_eq!(series.values, vec![9.2, 11.0]);
//! assert_eq!(series.threshold_line, Some(10.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Labnotes uses [`domain::LabNotesError`] for all errors. Absence (no rows,
//! no alerts, no notes) is an empty result, never an error.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
