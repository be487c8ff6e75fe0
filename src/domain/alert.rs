//! Alert domain model

use super::measurement::Threshold;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One threshold violation for one measurement on one row
///
/// Alerts are transient and never persisted.
///
/// # Examples
///
/// ```
/// use labnotes::domain::alert::Alert;
/// use labnotes::domain::measurement::Threshold;
/// use chrono::NaiveDate;
///
/// let alert = Alert {
///     measurement: "Hb".to_string(),
///     value: 9.2,
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     patient: "Jane Doe".to_string(),
///     threshold: Threshold::below(10.0),
/// };
/// assert_eq!(alert.to_string(), "Hb 9.2 on 2024-01-01 is low.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Measurement column name
    pub measurement: String,

    /// Offending value
    pub value: f64,

    /// Date of the row
    pub date: NaiveDate,

    /// Patient of the row
    pub patient: String,

    /// Threshold that was violated
    pub threshold: Threshold,
}

impl Alert {
    /// "low" for lower-bound violations, "high" otherwise
    pub fn direction(&self) -> &'static str {
        if self.threshold.comparison.is_lower_bound() {
            "low"
        } else {
            "high"
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} on {} is {}.",
            self.measurement,
            self.value,
            self.date.format("%Y-%m-%d"),
            self.direction()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_direction() {
        let alert = Alert {
            measurement: "WBC".to_string(),
            value: 14.0,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            patient: "Jane Doe".to_string(),
            threshold: Threshold::above(11.0),
        };
        assert_eq!(alert.to_string(), "WBC 14 on 2024-03-09 is high.");
    }

    #[test]
    fn test_alert_serialization() {
        let alert = Alert {
            measurement: "PLT".to_string(),
            value: 120.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            patient: "Jane Doe".to_string(),
            threshold: Threshold::below(150.0),
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["date"], "2024-01-02");
        assert_eq!(json["threshold"]["comparison"], "<");
    }
}
