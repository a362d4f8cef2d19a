use fivem_convert::core::rewrite::{qbcore_to_qbox_rules, rewrite, rewrite_file};
use std::fs;
use tempfile::TempDir;

const QBCORE_SCRIPT: &str = r#"local QBCore = exports['qb-core']:GetCoreObject()

RegisterNetEvent('garage:open', function()
    local playerData = QBCore.Functions.GetPlayerData()
    local plate = QBCore.Functions.GetPlate(vehicle)
    local vehicles = QBCore.Shared.Vehicles
    local items = QBCore.Shared.Items
    exports['qb-core']:DrawText(text, position)
    exports['qb-core']:HideText()
end)
"#;

const QBOX_SCRIPT: &str = r#"local QBCore = exports['qb-core']:GetCoreObject()

RegisterNetEvent('garage:open', function()
    local playerData = QBX.PlayerData
    local plate = qbx.getVehiclePlate(vehicle)
    local vehicles = exports.qbx_core:GetVehiclesByName()
    local items = exports.ox_inventory:Items()
    lib.showTextUI(text, { position = position })
    lib.hideTextUI()
end)
"#;

#[test]
fn test_full_script_rewrite() {
    let rules = qbcore_to_qbox_rules().unwrap();
    assert_eq!(rewrite(QBCORE_SCRIPT, &rules), QBOX_SCRIPT);
}

#[test]
fn test_rewrite_is_idempotent_on_converted_output() {
    // Nothing in the replacement vocabulary matches the patterns again, so
    // running the rule list twice changes nothing.
    let rules = qbcore_to_qbox_rules().unwrap();
    let once = rewrite(QBCORE_SCRIPT, &rules);
    let twice = rewrite(&once, &rules);
    assert_eq!(once, twice);
}

#[test]
fn test_rewrite_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("garage.lua");
    fs::write(&script, QBCORE_SCRIPT).unwrap();

    let destination = rewrite_file(&script).unwrap();

    assert_eq!(destination, temp_dir.path().join("garage_converted.lua"));
    assert_eq!(fs::read_to_string(destination).unwrap(), QBOX_SCRIPT);
    // The source script is left untouched.
    assert_eq!(fs::read_to_string(&script).unwrap(), QBCORE_SCRIPT);
}

#[test]
fn test_missing_script_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = rewrite_file(&temp_dir.path().join("absent.lua")).unwrap_err();
    assert!(err.to_string().contains("absent.lua"));
}
