//! Item records from a CSV file with a header row.

use crate::domain::model::{Extraction, Record};
use crate::utils::error::{ConvertError, Result};
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["name", "label", "weight"];

/// Reads a header-bearing CSV; each data row becomes one record keyed by
/// header names. A required column absent from the header fails with
/// `MissingColumn` before any row is read; a non-integer weight in a data
/// row is `MalformedRecord` (line numbers count the header as line 1).
pub fn extract(path: &Path) -> Result<Extraction> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut column_index = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, required) in column_index.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == required)
            .ok_or_else(|| ConvertError::MissingColumn {
                name: required.to_string(),
            })?;
    }
    let [name_idx, label_idx, weight_idx] = column_index;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line = index + 2;

        let weight_raw = field(&row, weight_idx, line)?.trim();
        let weight: i64 = weight_raw
            .parse()
            .map_err(|_| ConvertError::MalformedRecord {
                line,
                reason: format!("weight '{}' is not an integer", weight_raw),
            })?;

        let mut record = Record::new();
        record.set("name", field(&row, name_idx, line)?.trim());
        record.set("label", field(&row, label_idx, line)?.trim());
        record.set("weight", weight);
        records.push(record);
    }

    Ok(Extraction::new(records))
}

fn field<'r>(row: &'r csv::StringRecord, idx: usize, line: usize) -> Result<&'r str> {
    row.get(idx).ok_or_else(|| ConvertError::MalformedRecord {
        line,
        reason: "row has fewer fields than the header".to_string(),
    })
}
