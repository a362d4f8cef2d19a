//! Item records from a folder of inventory images. Only the file names are
//! used; the image contents are never read.

use super::capitalize;
use crate::domain::model::{Extraction, Record};
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

const IMAGE_EXTENSION: &str = "png";

/// Lists `dir` (non-recursive); every `.png` entry yields one record with
/// `name` = file stem, `label` = capitalized stem, `weight` = the given
/// default. Entries without the extension are filtered, not malformed, and
/// are counted in `skipped`. Entries are sorted by file name so output does
/// not depend on OS directory ordering.
pub fn extract(dir: &Path, default_weight: i64) -> Result<Extraction> {
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))? {
        let entry = entry.map_err(|e| ConvertError::io(dir, e))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut records = Vec::new();
    let mut skipped = 0;
    for file_name in &names {
        let path = Path::new(file_name);
        let is_image = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION));
        if !is_image {
            skipped += 1;
            continue;
        }

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
        let mut record = Record::new();
        record.set("name", stem);
        record.set("label", capitalize(stem));
        record.set("weight", default_weight);
        records.push(record);
    }

    tracing::debug!(
        "Image folder {}: {} records, {} non-image entries skipped",
        dir.display(),
        records.len(),
        skipped
    );

    Ok(Extraction { records, skipped })
}
