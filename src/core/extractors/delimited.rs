//! Item records from a plain "notepad" list: one `name,label,weight` line
//! per item.

use crate::domain::model::{Extraction, Record};
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Splits each non-blank line on `,` into at least `name`, `label`,
/// `weight` (fields are trimmed, extra fields ignored). Blank lines are
/// skipped without counting. Any line with fewer than 3 fields or a
/// non-integer weight fails the whole run with `MalformedRecord` naming the
/// 1-based line number.
pub fn extract(path: &Path) -> Result<Extraction> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;

    let mut records = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            return Err(ConvertError::MalformedRecord {
                line: index + 1,
                reason: format!(
                    "expected at least 3 comma-separated fields, found {}",
                    parts.len()
                ),
            });
        }

        let weight: i64 =
            parts[2]
                .trim()
                .parse()
                .map_err(|_| ConvertError::MalformedRecord {
                    line: index + 1,
                    reason: format!("weight '{}' is not an integer", parts[2].trim()),
                })?;

        let mut record = Record::new();
        record.set("name", parts[0].trim());
        record.set("label", parts[1].trim());
        record.set("weight", weight);
        records.push(record);
    }

    Ok(Extraction::new(records))
}
