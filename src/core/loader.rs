//! Lab table loader
//!
//! Parses delimited text with a header row into a [`LabTable`]. Only the
//! `Patient` and `Date` columns are required; every other column is kept as
//! a potential measurement and interpreted by name later in the pipeline.

use crate::domain::errors::{LabNotesError, LoadError};
use crate::domain::lab::{LabRecord, LabTable, DATE_COLUMN, PATIENT_COLUMN};
use crate::domain::result::Result;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const MISSING_MARKERS: &[&str] = &["na", "n/a", "nan", "null", "none"];

/// Parses raw delimited bytes into a lab table
///
/// # Errors
///
/// Returns a [`LoadError`] when the header lacks `Patient` or `Date`, when any
/// `Date` cell is unparseable, or when a row is structurally malformed. Rows
/// are never silently dropped.
///
/// # Examples
///
/// ```
/// use labnotes::core::loader::load;
///
/// let csv = "Patient,Date,Hb\nJane Doe,2024-01-01,9.2\n";
/// let table = load(csv.as_bytes(), b',').unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.records()[0].measurement("Hb"), Some(9.2));
/// ```
pub fn load(bytes: &[u8], delimiter: u8) -> std::result::Result<LabTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::Format {
            row: 0,
            message: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::MissingHeader);
    }

    let patient_idx = column_index(&columns, PATIENT_COLUMN)?;
    let date_idx = column_index(&columns, DATE_COLUMN)?;

    let mut table = LabTable::new(columns.clone());

    for (idx, row) in reader.records().enumerate() {
        let row_no = idx + 1;
        let row = row.map_err(|e| LoadError::Format {
            row: row_no,
            message: e.to_string(),
        })?;

        let raw_date = row.get(date_idx).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| LoadError::UnparseableDate {
            row: row_no,
            value: raw_date.to_string(),
        })?;

        let mut record = LabRecord::new(row.get(patient_idx).unwrap_or_default(), date);
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx == patient_idx || col_idx == date_idx {
                continue;
            }
            let name = &columns[col_idx];
            match parse_measurement(cell) {
                Some(value) => {
                    record.measurements.insert(name.clone(), value);
                }
                None if !cell.is_empty() && !is_missing_marker(cell) => {
                    tracing::debug!(row = row_no, column = %name, "Non-numeric cell treated as missing");
                }
                None => {}
            }
        }
        record.cells = row.iter().map(str::to_string).collect();
        table.push(record);
    }

    tracing::info!(
        rows = table.len(),
        columns = table.columns().len(),
        "Lab table loaded"
    );

    Ok(table)
}

/// Reads a file and parses it with [`load`]
///
/// # Errors
///
/// Returns [`LabNotesError::Io`] when the file can't be read and
/// [`LabNotesError::MalformedInput`] when its contents are rejected.
pub fn load_path(path: impl AsRef<Path>, delimiter: u8) -> Result<LabTable> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| LabNotesError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(load(&bytes, delimiter)?)
}

/// Parses a calendar date, truncating any time-of-day part
///
/// # Examples
///
/// ```
/// use labnotes::core::loader::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 5);
/// assert_eq!(parse_date("2024-01-05"), expected);
/// assert_eq!(parse_date("2024-01-05 08:30:00"), expected);
/// assert_eq!(parse_date("01/05/2024"), expected);
/// assert_eq!(parse_date("soon"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn parse_measurement(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() || is_missing_marker(cell) {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_missing_marker(cell: &str) -> bool {
    let lower = cell.trim().to_ascii_lowercase();
    MISSING_MARKERS.contains(&lower.as_str())
}

fn column_index(columns: &[String], name: &str) -> std::result::Result<usize, LoadError> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}
