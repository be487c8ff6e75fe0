//! Trend series construction
//!
//! Turns a (usually filtered) table into per-measurement date/value series.
//! Points keep table order; nothing is sorted, rounded or formatted here.

use crate::domain::lab::LabTable;
use crate::domain::measurement::MeasurementRegistry;
use crate::domain::series::Series;

/// Builds the series of one measurement
///
/// Rows where the measurement is absent are skipped. A measurement missing
/// from every row yields an empty series, which callers skip when rendering.
pub fn build(table: &LabTable, measurement: &str, threshold: Option<f64>) -> Series {
    let mut series = Series::empty(measurement, threshold);
    for record in table {
        if let Some(value) = record.measurement(measurement) {
            series.push(record.date, value);
        }
    }
    series
}

/// Builds one non-empty series per registered measurement, in registry order
///
/// Threshold lines come from the registry's bounds.
pub fn build_all(table: &LabTable, registry: &MeasurementRegistry) -> Vec<Series> {
    let all: Vec<Series> = registry
        .iter()
        .map(|spec| build(table, &spec.name, spec.threshold.map(|t| t.bound)))
        .filter(|series| !series.is_empty())
        .collect();
    tracing::debug!(series = all.len(), "Trend series built");
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lab::LabRecord;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn table() -> LabTable {
        LabTable::from_records(
            vec!["Patient".into(), "Date".into(), "Hb".into(), "WBC".into()],
            vec![
                LabRecord::new("A", d(5)).with_measurement("Hb", 11.0),
                LabRecord::new("A", d(1)).with_measurement("WBC", 6.1),
                LabRecord::new("A", d(3))
                    .with_measurement("Hb", 9.5)
                    .with_measurement("WBC", 5.8),
            ],
        )
    }

    #[test]
    fn test_build_skips_missing_and_keeps_order() {
        let series = build(&table(), "Hb", Some(10.0));
        assert_eq!(series.dates, vec![d(5), d(3)]);
        assert_eq!(series.values, vec![11.0, 9.5]);
        assert_eq!(series.threshold_line, Some(10.0));
    }

    #[test]
    fn test_build_absent_measurement_is_empty() {
        let series = build(&table(), "PLT", Some(150.0));
        assert!(series.is_empty());
        assert_eq!(series.dates.len(), series.values.len());
    }

    #[test]
    fn test_build_all_skips_empty_and_uses_registry_order() {
        let all = build_all(&table(), &MeasurementRegistry::clinical());
        let names: Vec<&str> = all.iter().map(|s| s.measurement.as_str()).collect();
        assert_eq!(names, vec!["Hb", "WBC"]);
        assert_eq!(all[0].threshold_line, Some(10.0));
        assert_eq!(all[1].threshold_line, None);
    }
}
