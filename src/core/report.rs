//! Per-patient lab report
//!
//! Bundles one pass of the pipeline (filter, then alerts and trend series
//! over the filtered rows) into a single value for the presentation layer.

use super::{alerts, filter, trend};
use crate::domain::alert::Alert;
use crate::domain::lab::{DateRange, LabTable};
use crate::domain::measurement::MeasurementRegistry;
use crate::domain::series::Series;
use serde::Serialize;

/// Filtered rows, alerts and trends for one patient and date window
#[derive(Debug, Clone, Serialize)]
pub struct LabReport {
    /// Patient the table was filtered to
    pub patient: String,

    /// Normalized date window
    pub range: DateRange,

    /// Filtered rows
    pub table: LabTable,

    /// Threshold violations in the filtered rows
    pub alerts: Vec<Alert>,

    /// Non-empty trend series, in registry order
    pub series: Vec<Series>,
}

impl LabReport {
    /// Runs the pipeline over `table`
    pub fn build(
        table: &LabTable,
        patient: &str,
        range: DateRange,
        registry: &MeasurementRegistry,
    ) -> Self {
        let filtered = filter::filter_range(table, patient, range);
        let alerts = alerts::evaluate(&filtered, registry);
        let series = trend::build_all(&filtered, registry);
        Self {
            patient: patient.to_string(),
            range,
            table: filtered,
            alerts,
            series,
        }
    }

    /// Whether any threshold was violated
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Log summary information
    pub fn log_summary(&self) {
        tracing::info!(
            patient = %self.patient,
            start = %self.range.start(),
            end = %self.range.end(),
            rows = self.table.len(),
            alerts = self.alerts.len(),
            series = self.series.len(),
            "Lab report built"
        );
        for alert in &self.alerts {
            tracing::warn!(
                measurement = %alert.measurement,
                value = alert.value,
                date = %alert.date,
                "{}",
                alert
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lab::LabRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_report_scopes_alerts_to_filtered_rows() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let table = LabTable::from_records(
            vec!["Patient".into(), "Date".into(), "Hb".into()],
            vec![
                LabRecord::new("A", d(1)).with_measurement("Hb", 8.0),
                LabRecord::new("B", d(2)).with_measurement("Hb", 7.0),
                LabRecord::new("A", d(20)).with_measurement("Hb", 6.0),
            ],
        );
        let report = LabReport::build(
            &table,
            "A",
            DateRange::new(d(1), d(10)),
            &MeasurementRegistry::clinical(),
        );
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.alerts.len(), 1);
        assert!(report.has_alerts());
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series[0].values, vec![8.0]);
    }
}
