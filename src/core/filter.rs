//! Patient and date-window filtering
//!
//! Restricts a table to rows of exactly one patient whose date falls inside
//! an inclusive window. An inverted window is swapped, not rejected.

use crate::domain::lab::{DateRange, LabTable};
use chrono::NaiveDate;

/// Returns the rows of `patient` dated within `[start, end]`, in table order
///
/// Patient matching is exact and case-sensitive. When `start > end` the
/// bounds are swapped and a warning is logged. No match yields an empty
/// table carrying the same header.
///
/// # Examples
///
/// ```
/// use labnotes::core::filter::filter;
/// use labnotes::domain::lab::{LabRecord, LabTable};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let table = LabTable::from_records(
///     vec!["Patient".into(), "Date".into()],
///     vec![LabRecord::new("Jane Doe", d(1)), LabRecord::new("jane doe", d(2))],
/// );
/// assert_eq!(filter(&table, "Jane Doe", d(1), d(31)).len(), 1);
/// ```
pub fn filter(table: &LabTable, patient: &str, start: NaiveDate, end: NaiveDate) -> LabTable {
    if start > end {
        tracing::warn!(
            start = %start,
            end = %end,
            "Date range inverted, swapping bounds"
        );
    }
    filter_range(table, patient, DateRange::new(start, end))
}

/// Same as [`filter`] with an already-normalized range
pub fn filter_range(table: &LabTable, patient: &str, range: DateRange) -> LabTable {
    let rows = table
        .iter()
        .filter(|r| r.patient == patient && range.contains(r.date))
        .cloned()
        .collect::<Vec<_>>();

    tracing::info!(
        patient = %patient,
        start = %range.start(),
        end = %range.end(),
        matched = rows.len(),
        total = table.len(),
        "Filter applied"
    );

    table.with_records(rows)
}
