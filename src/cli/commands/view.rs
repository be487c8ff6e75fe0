//! View command implementation
//!
//! Loads a lab table, filters it to one patient and date window and prints
//! the filtered rows, alerts, one trend chart per measurement with data and
//! the patient's saved notes. The filtered rows can be exported as well.

use super::{load_settings, parse_date_arg, report_error, EXIT_OK};
use crate::adapters::notes::{FileNoteStore, NoteRepository};
use crate::core::export;
use crate::core::loader;
use crate::core::report::LabReport;
use crate::domain::{DateRange, LabTable, MeasurementRegistry, Note, Series};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Width of the plotting area of text charts
const CHART_WIDTH: usize = 40;

/// Trend chart style
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// One marker per point
    Line,
    /// One bar per point, scaled from zero
    Bar,
}

/// Output format of the view command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the view command
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Lab table to read (delimited text with a header row)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Patient identifier, matched exactly
    #[arg(short, long)]
    pub patient: String,

    /// First day of the window (inclusive, defaults to the earliest date)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// Last day of the window (inclusive, defaults to the latest date)
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Trend chart style
    #[arg(long, value_enum, default_value_t = ChartKind::Line)]
    pub chart: ChartKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the filtered rows to this file (or directory)
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Don't show saved notes
    #[arg(long)]
    pub no_notes: bool,
}

#[derive(Serialize)]
struct ViewOutput<'a> {
    #[serde(flatten)]
    report: &'a LabReport,
    notes: &'a [Note],
}

impl ViewArgs {
    /// Execute the view command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_settings(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };
        let delimiter = config.lab.delimiter_byte();

        let table = match loader::load_path(&self.file, delimiter) {
            Ok(table) => table,
            Err(e) => return Ok(report_error("Failed to load lab table", &e)),
        };

        let Some(range) = self.window(&table) else {
            println!("No lab rows in {}", self.file.display());
            return Ok(EXIT_OK);
        };

        let registry = MeasurementRegistry::clinical();
        let report = LabReport::build(&table, &self.patient, range, &registry);
        report.log_summary();

        let notes = if self.no_notes {
            Vec::new()
        } else {
            let store = FileNoteStore::new(&config.notes.directory);
            match store.list(&self.patient) {
                Ok(notes) => notes,
                Err(e) => return Ok(report_error("Failed to read saved notes", &e)),
            }
        };

        match self.format {
            OutputFormat::Json => {
                let output = ViewOutput {
                    report: &report,
                    notes: &notes,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                for line in render_report(&report, &registry, self.chart) {
                    println!("{line}");
                }
                if !self.no_notes {
                    println!();
                    for line in render_notes(&notes) {
                        println!("{line}");
                    }
                }
            }
        }

        if let Some(target) = &self.export {
            let path = export_path(target, &self.patient);
            if let Err(e) = export::write_csv_file(&report.table, &path, delimiter) {
                return Ok(report_error("Failed to export filtered table", &e));
            }
            eprintln!("📥 Filtered table written to {}", path.display());
        }

        Ok(EXIT_OK)
    }

    /// Date window from the arguments, falling back to the table bounds
    fn window(&self, table: &LabTable) -> Option<DateRange> {
        let bounds = table.date_bounds();
        let start = self.from.or(bounds.map(|(first, _)| first))?;
        let end = self.to.or(bounds.map(|(_, last)| last))?;
        if start > end {
            tracing::warn!(%start, %end, "Date range is inverted, swapping bounds");
        }
        Some(DateRange::new(start, end))
    }
}

/// Resolves the export target, naming the file after the patient when
/// `target` is a directory
fn export_path(target: &Path, patient: &str) -> PathBuf {
    if target.is_dir() {
        target.join(export::export_file_name(patient))
    } else {
        target.to_path_buf()
    }
}

/// Renders the filtered table, alerts and trends as text lines
pub fn render_report(
    report: &LabReport,
    registry: &MeasurementRegistry,
    chart: ChartKind,
) -> Vec<String> {
    let mut lines = vec![format!(
        "🧾 Lab results for {} ({} to {})",
        report.patient,
        report.range.start(),
        report.range.end()
    )];

    if report.table.is_empty() {
        lines.push("No lab rows match this patient and date range.".to_string());
    } else {
        lines.extend(render_table(&report.table));
    }

    lines.push(String::new());
    if report.has_alerts() {
        lines.push("⚠️  Alerts".to_string());
        lines.extend(report.alerts.iter().map(|alert| format!("  {alert}")));
    } else {
        lines.push("✅ No critical lab alerts".to_string());
    }

    for series in &report.series {
        lines.push(String::new());
        let label = registry
            .get(&series.measurement)
            .map(|spec| spec.label.as_str())
            .unwrap_or(series.measurement.as_str());
        match registry.threshold(&series.measurement) {
            Some(threshold) => lines.push(format!(
                "📊 {} Trend ({}, alert {} {})",
                series.measurement, label, series.measurement, threshold
            )),
            None => lines.push(format!("📊 {} Trend ({})", series.measurement, label)),
        }
        lines.extend(render_series(series, chart, CHART_WIDTH));
    }

    lines
}

/// Renders rows as a left-aligned text table
pub fn render_table(table: &LabTable) -> Vec<String> {
    let columns = table.columns();
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|record| export::record_cells(columns, record))
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(columns));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines
}

/// Renders one series as a text chart, one line per point
///
/// `*` marks a value on a line chart and `#` fills a bar; `|` marks the
/// threshold line when the series has one.
pub fn render_series(series: &Series, chart: ChartKind, width: usize) -> Vec<String> {
    let width = width.max(2);
    let mut lo = series.values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = series
        .values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if let Some(line) = series.threshold_line {
        lo = lo.min(line);
        hi = hi.max(line);
    }
    if chart == ChartKind::Bar {
        lo = lo.min(0.0);
    }

    let column = |value: f64| -> usize {
        if hi > lo {
            (((value - lo) / (hi - lo)) * (width - 1) as f64).round() as usize
        } else {
            0
        }
    };
    let threshold_col = series.threshold_line.map(column);

    series
        .points()
        .map(|(date, value)| {
            let mut plot = vec![' '; width];
            let at = column(value).min(width - 1);
            match chart {
                ChartKind::Line => plot[at] = '*',
                ChartKind::Bar => plot[..=at].iter_mut().for_each(|c| *c = '#'),
            }
            if let Some(t) = threshold_col {
                plot[t.min(width - 1)] = '|';
            }
            let plot: String = plot.into_iter().collect();
            format!("  {date}  {plot}  {value}")
        })
        .collect()
}

/// Renders saved notes, newest first
pub fn render_notes(notes: &[Note]) -> Vec<String> {
    if notes.is_empty() {
        return vec!["No saved notes found for this patient.".to_string()];
    }
    let mut lines = vec!["📂 Saved notes".to_string()];
    for note in notes {
        lines.push(format!(
            "🗂 {} (saved {}, date {})",
            note.id.file_name(),
            note.created_at.format("%Y-%m-%d %H:%M"),
            note.date
        ));
        lines.extend(note.text.lines().map(|line| format!("    {line}")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load;

    fn jane_table() -> LabTable {
        load(
            b"Patient,Date,Hb,WBC\nJane Doe,2024-01-01,9.2,5.1\nJane Doe,2024-01-05,11.0,\n",
            b',',
        )
        .unwrap()
    }

    fn jane_report() -> LabReport {
        let table = jane_table();
        let (first, last) = table.date_bounds().unwrap();
        LabReport::build(
            &table,
            "Jane Doe",
            DateRange::new(first, last),
            &MeasurementRegistry::clinical(),
        )
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let lines = render_table(&jane_table());
        assert_eq!(lines[0], "Patient   Date        Hb    WBC");
        assert_eq!(lines[1], "--------  ----------  ----  ---");
        assert_eq!(lines[2], "Jane Doe  2024-01-01  9.2   5.1");
        assert_eq!(lines[3], "Jane Doe  2024-01-05  11.0");
    }

    #[test]
    fn test_render_report_lists_alerts_and_trends() {
        let lines = render_report(
            &jane_report(),
            &MeasurementRegistry::clinical(),
            ChartKind::Line,
        );
        assert!(lines.iter().any(|l| l == "  Hb 9.2 on 2024-01-01 is low."));
        assert!(lines
            .iter()
            .any(|l| l == "📊 Hb Trend (Hemoglobin, alert Hb < 10)"));
        assert!(lines.iter().any(|l| l == "📊 WBC Trend (White blood cells)"));
        assert!(!lines.iter().any(|l| l.contains("PLT")));
    }

    #[test]
    fn test_render_report_without_alerts() {
        let table = load(b"Patient,Date,Hb\nA,2024-01-01,12.5\n", b',').unwrap();
        let report = LabReport::build(
            &table,
            "A",
            DateRange::new(table.date_bounds().unwrap().0, table.date_bounds().unwrap().1),
            &MeasurementRegistry::clinical(),
        );
        let lines = render_report(&report, &MeasurementRegistry::clinical(), ChartKind::Bar);
        assert!(lines.iter().any(|l| l == "✅ No critical lab alerts"));
    }

    #[test]
    fn test_render_line_series_marks_threshold() {
        let series = Series {
            measurement: "Hb".to_string(),
            dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ],
            values: vec![8.0, 12.0],
            threshold_line: Some(10.0),
        };
        let lines = render_series(&series, ChartKind::Line, 5);
        assert_eq!(lines[0], "  2024-01-01  * |    8");
        assert_eq!(lines[1], "  2024-01-05    | *  12");
    }

    #[test]
    fn test_render_bar_series_scales_from_zero() {
        let series = Series {
            measurement: "WBC".to_string(),
            dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ],
            values: vec![2.0, 4.0],
            threshold_line: None,
        };
        let lines = render_series(&series, ChartKind::Bar, 5);
        assert_eq!(lines[0], "  2024-01-01  ###    2");
        assert_eq!(lines[1], "  2024-01-02  #####  4");
    }

    #[test]
    fn test_render_notes_empty() {
        assert_eq!(
            render_notes(&[]),
            vec!["No saved notes found for this patient.".to_string()]
        );
    }

    #[test]
    fn test_export_path_for_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(
            export_path(dir.path(), "Jane Doe"),
            dir.path().join("Jane Doe_labs.csv")
        );
        let file = dir.path().join("out.csv");
        assert_eq!(export_path(&file, "Jane Doe"), file);
    }

    #[test]
    fn test_json_output_flattens_report() {
        let report = jane_report();
        let output = ViewOutput {
            report: &report,
            notes: &[],
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["patient"], "Jane Doe");
        assert_eq!(value["alerts"].as_array().unwrap().len(), 1);
        assert!(value["notes"].as_array().unwrap().is_empty());
    }
}
