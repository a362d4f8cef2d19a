//! Whole-script substitution mode: an ordered rule list applied over the
//! full script text, one rule at a time. Each rule replaces all of its
//! non-overlapping matches before the next rule runs, so later rules see
//! earlier rules' output. That sequential order is a correctness contract:
//! the rule list was written and tested against it, and fusing the rules
//! into one pass would change output wherever one rule's replacement text
//! matches a later rule's pattern.

use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }
}

/// The fixed QBCore → QBox rule list, in application order.
pub fn qbcore_to_qbox_rules() -> Result<Vec<SubstitutionRule>> {
    let rules = [
        (r"QBCore\.Functions\.GetPlayerData\(\)", "QBX.PlayerData"),
        (
            r"QBCore\.Functions\.GetPlate\((\w+)\)",
            "qbx.getVehiclePlate($1)",
        ),
        (r"QBCore\.Shared\.Jobs", "exports.qbx_core:GetJobs()"),
        (r"QBCore\.Shared\.Gangs", "exports.qbx_core:GetGangs()"),
        (
            r"QBCore\.Shared\.Vehicles",
            "exports.qbx_core:GetVehiclesByName()",
        ),
        (r"QBCore\.Shared\.Weapons", "exports.qbx_core:GetWeapons()"),
        (r"QBCore\.Shared\.Locations", "exports.qbx_core:GetLocations()"),
        (r"QBCore\.Shared\.Items", "exports.ox_inventory:Items()"),
        (r"exports\['qb-core'\]:KeyPressed\(\)", "lib.hideTextUI()"),
        (r"exports\['qb-core'\]:HideText\(\)", "lib.hideTextUI()"),
        (
            r"exports\['qb-core'\]:DrawText\((\w+), (\w+)\)",
            "lib.showTextUI($1, { position = $2 })",
        ),
        (
            r"exports\['qb-core'\]:ChangeText\((\w+), (\w+)\)",
            "lib.hideTextUI() lib.showTextUI($1, { position = $2 })",
        ),
    ];

    rules
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
}

/// Applies the rule list sequentially over the whole text.
pub fn rewrite(text: &str, rules: &[SubstitutionRule]) -> String {
    let mut code = text.to_string();
    for rule in rules {
        code = rule
            .pattern
            .replace_all(&code, rule.replacement.as_str())
            .into_owned();
    }
    code
}

/// Rewrites a Lua script on disk, writing the result next to the source as
/// `<stem>_converted.lua`. Returns the destination path.
pub fn rewrite_file(source: &Path) -> Result<PathBuf> {
    let code = fs::read_to_string(source).map_err(|e| ConvertError::io(source, e))?;

    let rules = qbcore_to_qbox_rules()?;
    let converted = rewrite(&code, &rules);

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConvertError::ProcessingError {
            message: format!("'{}' has no usable file name", source.display()),
        })?;
    let destination = source.with_file_name(format!("{stem}_converted.lua"));

    fs::write(&destination, converted).map_err(|e| ConvertError::io(&destination, e))?;
    tracing::info!("Rewrote {} -> {}", source.display(), destination.display());

    Ok(destination)
}
