//! Filtered table export
//!
//! Writes a [`LabTable`] back out as delimited text with the same header it
//! was loaded from and no synthetic index column. Dates are normalized to
//! `YYYY-MM-DD`; other cells are written as they were read.

use crate::domain::errors::LabNotesError;
use crate::domain::lab::{LabRecord, LabTable, DATE_COLUMN, PATIENT_COLUMN};
use crate::domain::result::Result;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Default download name for a patient's filtered table
pub fn export_file_name(patient: &str) -> String {
    format!("{patient}_labs.csv")
}

/// Writes `table` to `writer`
///
/// # Errors
///
/// Returns [`LabNotesError::Io`] when the underlying writer fails.
pub fn write_csv<W: Write>(table: &LabTable, writer: W, delimiter: u8) -> Result<()> {
    let mut out = WriterBuilder::new().delimiter(delimiter).from_writer(writer);

    out.write_record(table.columns()).map_err(csv_error)?;
    for record in table {
        out.write_record(record_cells(table.columns(), record))
            .map_err(csv_error)?;
    }
    out.flush()?;
    Ok(())
}

/// Renders `table` as delimited bytes, ready for a download sink
pub fn to_csv_bytes(table: &LabTable, delimiter: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf, delimiter)?;
    Ok(buf)
}

/// Writes `table` to a file at `path`, replacing any existing file
pub fn write_csv_file(table: &LabTable, path: impl AsRef<Path>, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .map_err(|e| LabNotesError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    write_csv(table, file, delimiter)?;
    tracing::info!(path = %path.display(), rows = table.len(), "Filtered table exported");
    Ok(())
}

/// Cells of one row in `columns` order, as written on export
pub fn record_cells(columns: &[String], record: &LabRecord) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| match column.as_str() {
            PATIENT_COLUMN => record.patient.clone(),
            DATE_COLUMN => record.date.format("%Y-%m-%d").to_string(),
            name => record
                .cells
                .get(idx)
                .cloned()
                .or_else(|| record.measurement(name).map(|v| v.to_string()))
                .unwrap_or_default(),
        })
        .collect()
}

fn csv_error(err: csv::Error) -> LabNotesError {
    LabNotesError::Io(format!("CSV write error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load;
    use chrono::NaiveDate;

    #[test]
    fn test_export_reproduces_header_and_cells() {
        let csv = "Patient,Date,Hb,Comment\nJane Doe,2024-01-01 08:00:00,9.2,\"pale, tired\"\n";
        let table = load(csv.as_bytes(), b',').unwrap();
        let bytes = to_csv_bytes(&table, b',').unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Patient,Date,Hb,Comment\nJane Doe,2024-01-01,9.2,\"pale, tired\"\n"
        );
    }

    #[test]
    fn test_export_built_records_without_cells() {
        let table = LabTable::from_records(
            vec!["Patient".into(), "Date".into(), "PLT".into(), "WBC".into()],
            vec![LabRecord::new("A", NaiveDate::from_ymd_opt(2024, 2, 3).unwrap())
                .with_measurement("PLT", 140.5)],
        );
        let text = String::from_utf8(to_csv_bytes(&table, b',').unwrap()).unwrap();
        assert_eq!(text, "Patient,Date,PLT,WBC\nA,2024-02-03,140.5,\n");
    }

    #[test]
    fn test_export_empty_table_writes_header() {
        let table = LabTable::new(vec!["Patient".into(), "Date".into()]);
        let text = String::from_utf8(to_csv_bytes(&table, b',').unwrap()).unwrap();
        assert_eq!(text, "Patient,Date\n");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Jane Doe"), "Jane Doe_labs.csv");
    }
}
