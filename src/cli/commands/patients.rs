//! Patients command implementation
//!
//! Lists the patients of a lab table, in first-seen order, with the date
//! range the table covers.

use super::{load_settings, report_error, EXIT_OK};
use crate::core::loader;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the patients command
#[derive(Args, Debug)]
pub struct PatientsArgs {
    /// Lab table to read (delimited text with a header row)
    #[arg(short, long)]
    pub file: PathBuf,
}

impl PatientsArgs {
    /// Execute the patients command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_settings(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };

        let table = match loader::load_path(&self.file, config.lab.delimiter_byte()) {
            Ok(table) => table,
            Err(e) => return Ok(report_error("Failed to load lab table", &e)),
        };

        let patients = table.patients();
        if patients.is_empty() {
            println!("No lab rows in {}", self.file.display());
            return Ok(EXIT_OK);
        }

        println!("Patients in {} ({} rows)", self.file.display(), table.len());
        for patient in &patients {
            let rows = table.iter().filter(|r| r.patient == *patient).count();
            println!("  {patient} ({rows} rows)");
        }
        if let Some((first, last)) = table.date_bounds() {
            println!();
            println!("Date range: {first} to {last}");
        }

        Ok(EXIT_OK)
    }
}
