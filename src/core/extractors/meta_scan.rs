//! Vehicle and weapon records scanned out of `.meta` files. The files are
//! XML-shaped but only a handful of fixed tags matter, so they are located
//! by pattern matching rather than parsed structurally.

use super::capitalize;
use crate::domain::model::{Extraction, Record, VehicleDefaults};
use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const VEHICLES_META: &str = "vehicles.meta";
pub const WEAPONS_META: &str = "weapons.meta";

/// Ammo assigned to weapons that outnumber the ammo tags in their file.
pub const UNKNOWN_AMMO: &str = "UNKNOWN";

/// Recursively collects every file named `file_name` under `root`, in a
/// stable walk order. Unreadable directories fail the run.
fn find_meta_files(root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ConvertError::io(path, e.into())
        })?;
        if entry.file_type().is_file() && entry.file_name() == file_name {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Scans every `vehicles.meta` under `root` for `<modelName>` tags, in
/// document order. Each occurrence becomes one record: `model` is the
/// lowercased capture, `name` the capitalized one, and the remaining fields
/// come from the configured defaults.
pub fn extract_vehicles(root: &Path, defaults: &VehicleDefaults) -> Result<Extraction> {
    let model_name_pattern =
        Regex::new(r"<modelName>(\w+)</modelName>").expect("fixed vehicle tag pattern");

    let mut records = Vec::new();
    for file in find_meta_files(root, VEHICLES_META)? {
        let content = fs::read_to_string(&file).map_err(|e| ConvertError::io(&file, e))?;

        for caps in model_name_pattern.captures_iter(&content) {
            let model = &caps[1];
            let mut record = Record::new();
            record.set("model", model.to_lowercase());
            record.set("name", capitalize(model));
            record.set("brand", defaults.brand.as_str());
            record.set("price", defaults.price);
            record.set("category", defaults.category.as_str());
            record.set("type", defaults.vehicle_type.as_str());
            record.set("shop", defaults.shop.as_str());
            records.push(record);
        }
    }

    Ok(Extraction::new(records))
}

/// Scans every `weapons.meta` under `root`. Weapon `<Name>` tags and
/// `<AmmoInfo ref>` tags are collected independently per file and paired
/// positionally: the Nth ammo tag goes to the Nth weapon tag in document
/// order. The tags are not adjacent in the source markup, so positional
/// pairing is the documented policy here, not incidental ordering. Weapons
/// left over once the ammo tags run out get [`UNKNOWN_AMMO`].
pub fn extract_weapons(root: &Path, default_weight: i64) -> Result<Extraction> {
    let name_pattern = Regex::new(r"<Name>(WEAPON_\w+)</Name>").expect("fixed weapon tag pattern");
    let ammo_pattern =
        Regex::new(r#"<AmmoInfo ref="(\w+)"\s*/>"#).expect("fixed ammo tag pattern");

    let mut records = Vec::new();
    for file in find_meta_files(root, WEAPONS_META)? {
        let content = fs::read_to_string(&file).map_err(|e| ConvertError::io(&file, e))?;

        let weapons: Vec<&str> = name_pattern
            .captures_iter(&content)
            .map(|caps| caps.get(1).expect("pattern has one group").as_str())
            .collect();
        let ammo_refs: Vec<&str> = ammo_pattern
            .captures_iter(&content)
            .map(|caps| caps.get(1).expect("pattern has one group").as_str())
            .collect();

        for (index, weapon) in weapons.iter().enumerate() {
            let ammotype = ammo_refs.get(index).copied().unwrap_or(UNKNOWN_AMMO);
            let label_source = weapon.strip_prefix("WEAPON_").unwrap_or(weapon);

            let mut record = Record::new();
            record.set("name", weapon.to_lowercase());
            record.set("label", capitalize(label_source));
            record.set("ammotype", ammotype);
            record.set("weight", default_weight);
            records.push(record);
        }
    }

    Ok(Extraction::new(records))
}
