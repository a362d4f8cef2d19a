//! Record-mode rule set: one output template per (entity kind, framework)
//! pair, plus the fixed ammo vocabulary tables. The emitted text is pasted
//! directly into framework config files, so field order and literal syntax
//! are reproduced byte-exact per template.

use crate::domain::model::{EntityKind, Framework, Record};
use crate::utils::error::Result;

/// Ammo identifier pairs, ox_inventory vocabulary on the left, native
/// (QBCore) vocabulary on the right. The two directions are exact inverses.
const AMMO_TABLE: &[(&str, &str)] = &[
    ("ammo-9", "AMMO_PISTOL"),
    ("ammo-45", "AMMO_SMG"),
    ("ammo-rifle", "AMMO_RIFLE"),
    ("ammo-shotgun", "AMMO_SHOTGUN"),
    ("ammo-sniper", "AMMO_SNIPER"),
    ("ammo-musket", "AMMO_MUSKET"),
];

/// Translates an ox_inventory ammo name to the native vocabulary. Unknown
/// identifiers pass through unchanged; the set of ammo types is not
/// exhaustively known, so this is tolerated rather than an error.
pub fn ox_to_qbcore(ammo: &str) -> &str {
    AMMO_TABLE
        .iter()
        .find(|(ox, _)| *ox == ammo)
        .map_or(ammo, |(_, qb)| *qb)
}

/// Inverse of [`ox_to_qbcore`], with the same identity fallback.
pub fn qbcore_to_ox(ammo: &str) -> &str {
    AMMO_TABLE
        .iter()
        .find(|(_, qb)| *qb == ammo)
        .map_or(ammo, |(ox, _)| *ox)
}

/// Default destination file name per entity kind and framework. Callers can
/// override these through the `[output]` table of the TOML config.
pub fn default_output_name(entity: EntityKind, framework: Framework) -> String {
    let name = match (entity, framework) {
        (EntityKind::Item, Framework::OxInventory) => "ox_inventory_items.txt",
        (EntityKind::Item, Framework::Esx) => "esx_items.txt",
        (EntityKind::Item, _) => "qb_items.txt",
        (EntityKind::Vehicle, Framework::Esx) => "esx_vehicles.sql",
        (EntityKind::Vehicle, _) => "qb_vehicles.txt",
        (EntityKind::Weapon, Framework::OxInventory) => "ox_inventory_weapons.txt",
        (EntityKind::Weapon, _) => "qb_weapons.txt",
    };
    name.to_string()
}

/// Renders one output entry per record, in input order.
pub fn render_lines(
    records: &[Record],
    entity: EntityKind,
    framework: Framework,
) -> Result<Vec<String>> {
    records
        .iter()
        .map(|record| render_record(record, entity, framework))
        .collect()
}

fn render_record(record: &Record, entity: EntityKind, framework: Framework) -> Result<String> {
    match entity {
        EntityKind::Item => render_item(record, framework),
        EntityKind::Vehicle => render_vehicle(record, framework),
        EntityKind::Weapon => render_weapon(record, framework),
    }
}

fn render_item(record: &Record, framework: Framework) -> Result<String> {
    let name = record.str_field("name")?;
    let label = record.str_field("label")?;
    let weight = record.int_field("weight")?;

    let line = match framework {
        Framework::OxInventory => format!(
            "['{name}'] = {{\n    label = '{label}',\n    weight = {weight},\n    stack = true,\n    close = true,\n}},"
        ),
        // QBCore-family items carry fixed boilerplate fields next to the
        // extracted ones. QBox and ESX item lists are QBCore-shaped.
        Framework::Qbcore | Framework::Qbox | Framework::Esx => format!(
            "{name} = {{ name = '{name}', label = '{label}', weight = {weight}, type = 'item', image = '{name}.png', unique = false, useable = false, shouldClose = true, description = '' }},"
        ),
    };
    Ok(line)
}

fn render_vehicle(record: &Record, framework: Framework) -> Result<String> {
    let model = record.str_field("model")?;
    let name = record.str_field("name")?;
    let brand = record.str_field("brand")?;
    let price = record.int_field("price")?;
    let category = record.str_field("category")?;

    let line = match framework {
        Framework::Esx => format!(
            "INSERT INTO `vehicles` (`name`, `model`, `price`, `category`) VALUES ('{name}', '{model}', {price}, '{category}');"
        ),
        _ => {
            let vehicle_type = record.str_field("type")?;
            let shop = record.str_field("shop")?;
            format!(
                "['{model}'] = {{ model = '{model}', name = '{name}', brand = '{brand}', price = {price}, category = '{category}', type = '{vehicle_type}', shop = '{shop}' }},"
            )
        }
    };
    Ok(line)
}

fn render_weapon(record: &Record, framework: Framework) -> Result<String> {
    let name = record.str_field("name")?;
    let label = record.str_field("label")?;
    let ammotype = record.str_field("ammotype")?;

    let line = match framework {
        Framework::OxInventory => {
            let weight = record.int_field("weight")?;
            let ammo = qbcore_to_ox(ammotype);
            format!(
                "['{name}'] = {{\n    label = '{label}',\n    weight = {weight},\n    ammoname = '{ammo}',\n}},"
            )
        }
        _ => format!(
            "{name} = {{ name = '{name}', label = '{label}', weapontype = '{label}', ammotype = '{ammotype}', damagereason = 'Shot' }},"
        ),
    };
    Ok(line)
}
