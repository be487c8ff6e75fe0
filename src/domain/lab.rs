//! Lab table domain model
//!
//! A [`LabTable`] is an ordered sequence of [`LabRecord`] rows together with
//! the header it was loaded from. Tables are plain values: every pipeline
//! stage takes one and returns a new one, nothing keeps table state between
//! calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the required patient identifier column
pub const PATIENT_COLUMN: &str = "Patient";

/// Name of the required date column
pub const DATE_COLUMN: &str = "Date";

/// One row of lab measurements for a single patient on a single date
///
/// # Examples
///
/// ```
/// use labnotes::domain::lab::LabRecord;
/// use chrono::NaiveDate;
///
/// let record = LabRecord::new("Jane Doe", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .with_measurement("Hb", 9.2);
/// assert_eq!(record.measurement("Hb"), Some(9.2));
/// assert_eq!(record.measurement("PLT"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabRecord {
    /// Patient identifier, compared verbatim
    pub patient: String,

    /// Calendar date of the measurements
    pub date: NaiveDate,

    /// Non-missing numeric measurements keyed by column name
    pub measurements: BTreeMap<String, f64>,

    /// Raw cells in header order, kept so exports reproduce the input
    #[serde(skip)]
    pub cells: Vec<String>,
}

impl LabRecord {
    /// Creates a record with no measurements
    pub fn new(patient: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            patient: patient.into(),
            date,
            measurements: BTreeMap::new(),
            cells: Vec::new(),
        }
    }

    /// Adds a measurement value
    pub fn with_measurement(mut self, name: impl Into<String>, value: f64) -> Self {
        self.measurements.insert(name.into(), value);
        self
    }

    /// Returns the value of a measurement, `None` when absent or missing
    pub fn measurement(&self, name: &str) -> Option<f64> {
        self.measurements.get(name).copied()
    }
}

/// Ordered collection of lab records
///
/// Insertion order is source order. Duplicate (patient, date) pairs are
/// permitted and all retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabTable {
    columns: Vec<String>,
    records: Vec<LabRecord>,
}

impl LabTable {
    /// Creates an empty table with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Creates a table from a header and rows
    pub fn from_records(columns: Vec<String>, records: Vec<LabRecord>) -> Self {
        Self { columns, records }
    }

    /// Creates a table sharing this table's header but holding other rows
    pub fn with_records(&self, records: Vec<LabRecord>) -> Self {
        Self {
            columns: self.columns.clone(),
            records,
        }
    }

    /// Appends a row
    pub fn push(&mut self, record: LabRecord) {
        self.records.push(record);
    }

    /// Header columns in source order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Header columns other than `Patient` and `Date`
    pub fn measurement_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != PATIENT_COLUMN && *c != DATE_COLUMN)
    }

    /// Rows in source order
    pub fn records(&self) -> &[LabRecord] {
        &self.records
    }

    /// Iterates rows in source order
    pub fn iter(&self) -> std::slice::Iter<'_, LabRecord> {
        self.records.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct patient identifiers in first-seen order
    pub fn patients(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.patient.as_str()) {
                seen.push(record.patient.as_str());
            }
        }
        seen
    }

    /// Earliest and latest date in the table, `None` when empty
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.date), hi.max(r.date))
        }))
    }
}

impl<'a> IntoIterator for &'a LabTable {
    type Item = &'a LabRecord;
    type IntoIter = std::slice::Iter<'a, LabRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Inclusive calendar date interval
///
/// An inverted pair is swapped on construction, so `start <= end` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, swapping the bounds when `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Lower bound (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Upper bound (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the range, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
