//! Trend series domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parallel date/value sequences for one measurement, ready for rendering
///
/// `dates` and `values` always have the same length and follow table order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    /// Measurement column name
    pub measurement: String,

    /// Row dates, in table order
    pub dates: Vec<NaiveDate>,

    /// Row values, parallel to `dates`
    pub values: Vec<f64>,

    /// Threshold bound to overlay, passed through unmodified
    pub threshold_line: Option<f64>,
}

impl Series {
    /// Creates an empty series
    pub fn empty(measurement: impl Into<String>, threshold_line: Option<f64>) -> Self {
        Self {
            measurement: measurement.into(),
            dates: Vec::new(),
            values: Vec::new(),
            threshold_line,
        }
    }

    /// Appends one point
    pub fn push(&mut self, date: NaiveDate, value: f64) {
        self.dates.push(date);
        self.values.push(value);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(date, value)` points in order
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
