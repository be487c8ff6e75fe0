//! Threshold alert evaluation
//!
//! Rows are scanned in table order; within a row measurements are checked in
//! registry (lexicographic) order, so identical input always yields alerts in
//! the same order. A measurement missing from a row never alerts.

use crate::domain::alert::Alert;
use crate::domain::lab::LabTable;
use crate::domain::measurement::MeasurementRegistry;

/// Lazily yields every threshold violation in `table`
///
/// Each call returns a fresh iterator; there is no cursor state to reset.
pub fn alerts<'a>(
    table: &'a LabTable,
    registry: &'a MeasurementRegistry,
) -> impl Iterator<Item = Alert> + 'a {
    table.iter().flat_map(move |record| {
        registry.thresholds().filter_map(move |(name, threshold)| {
            let value = record.measurement(name)?;
            threshold.is_violated_by(value).then(|| Alert {
                measurement: name.to_string(),
                value,
                date: record.date,
                patient: record.patient.clone(),
                threshold,
            })
        })
    })
}

/// Collects every threshold violation in `table`
///
/// # Examples
///
/// ```
/// use labnotes::core::alerts::evaluate;
/// use labnotes::domain::lab::{LabRecord, LabTable};
/// use labnotes::domain::measurement::MeasurementRegistry;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let table = LabTable::from_records(
///     vec!["Patient".into(), "Date".into(), "Hb".into()],
///     vec![
///         LabRecord::new("Jane Doe", d(1)).with_measurement("Hb", 9.2),
///         LabRecord::new("Jane Doe", d(5)).with_measurement("Hb", 11.0),
///     ],
/// );
/// let found = evaluate(&table, &MeasurementRegistry::clinical());
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].value, 9.2);
/// ```
pub fn evaluate(table: &LabTable, registry: &MeasurementRegistry) -> Vec<Alert> {
    let found: Vec<Alert> = alerts(table, registry).collect();
    tracing::info!(rows = table.len(), alerts = found.len(), "Alerts evaluated");
    found
}
