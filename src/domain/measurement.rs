//! Measurement registry
//!
//! Maps each known measurement column to its display label and optional alert
//! threshold. Alerting and trend building iterate this registry rather than
//! dispatching on column names in code, so adding a measurement is a data
//! change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Comparison direction of a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// Violated when `value < bound`
    #[serde(rename = "<")]
    LessThan,
    /// Violated when `value <= bound`
    #[serde(rename = "<=")]
    LessOrEqual,
    /// Violated when `value > bound`
    #[serde(rename = ">")]
    GreaterThan,
    /// Violated when `value >= bound`
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl Comparison {
    /// Operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::LessThan => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }

    /// Whether a violation means the value is too low
    pub fn is_lower_bound(&self) -> bool {
        matches!(self, Comparison::LessThan | Comparison::LessOrEqual)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Alert condition for one measurement
///
/// # Examples
///
/// ```
/// use labnotes::domain::measurement::Threshold;
///
/// let low_hb = Threshold::below(10.0);
/// assert!(low_hb.is_violated_by(9.2));
/// assert!(!low_hb.is_violated_by(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Comparison applied as `value <op> bound`
    pub comparison: Comparison,

    /// Clinical bound
    pub bound: f64,
}

impl Threshold {
    /// Creates a threshold
    pub fn new(comparison: Comparison, bound: f64) -> Self {
        Self { comparison, bound }
    }

    /// Violated when the value is strictly below `bound`
    pub fn below(bound: f64) -> Self {
        Self::new(Comparison::LessThan, bound)
    }

    /// Violated when the value is strictly above `bound`
    pub fn above(bound: f64) -> Self {
        Self::new(Comparison::GreaterThan, bound)
    }

    /// Whether `value` violates this threshold
    pub fn is_violated_by(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::LessThan => value < self.bound,
            Comparison::LessOrEqual => value <= self.bound,
            Comparison::GreaterThan => value > self.bound,
            Comparison::GreaterOrEqual => value >= self.bound,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.comparison, self.bound)
    }
}

/// Registry entry for one measurement column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSpec {
    /// Column name, matched exactly
    pub name: String,

    /// Human-readable label for display
    pub label: String,

    /// Alert threshold, if the measurement has one
    pub threshold: Option<Threshold>,
}

/// Registry of known measurements, iterated in lexicographic name order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementRegistry {
    entries: BTreeMap<String, MeasurementSpec>,
}

impl MeasurementRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed clinical registry: `Hb < 10`, `PLT < 150`, `WBC` charted only
    pub fn clinical() -> Self {
        Self::new()
            .register("Hb", "Hemoglobin", Some(Threshold::below(10.0)))
            .register("PLT", "Platelets", Some(Threshold::below(150.0)))
            .register("WBC", "White blood cells", None)
    }

    /// Adds or replaces an entry
    pub fn register(
        mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        threshold: Option<Threshold>,
    ) -> Self {
        let name = name.into();
        self.entries.insert(
            name.clone(),
            MeasurementSpec {
                name,
                label: label.into(),
                threshold,
            },
        );
        self
    }

    /// Looks up an entry by exact column name
    pub fn get(&self, name: &str) -> Option<&MeasurementSpec> {
        self.entries.get(name)
    }

    /// Threshold configured for a measurement
    pub fn threshold(&self, name: &str) -> Option<Threshold> {
        self.entries.get(name).and_then(|spec| spec.threshold)
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = &MeasurementSpec> {
        self.entries.values()
    }

    /// Entries that carry a threshold, in name order
    pub fn thresholds(&self) -> impl Iterator<Item = (&str, Threshold)> {
        self.entries
            .values()
            .filter_map(|spec| spec.threshold.map(|t| (spec.name.as_str(), t)))
    }

    /// Number of registered measurements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
