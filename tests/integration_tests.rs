use fivem_convert::domain::ports::Pipeline;
use fivem_convert::{
    ConvertEngine, ConvertPipeline, Framework, LocalStorage, RecordSource, RunConfig,
};
use std::fs;
use tempfile::TempDir;

fn run_once(config: RunConfig, source: RecordSource) -> fivem_convert::RunSummary {
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ConvertPipeline::new(storage, config, source);
    ConvertEngine::new(pipeline).run().unwrap()
}

#[test]
fn test_end_to_end_notepad_items_for_ox() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let list_path = temp_dir.path().join("items.txt");
    fs::write(&list_path, "pistol,Pistol,200\nrifle,Rifle,4000\n").unwrap();

    let mut config = RunConfig::new(Framework::OxInventory);
    config.output_path = output_path.to_str().unwrap().to_string();

    let summary = run_once(config, RecordSource::Notepad(list_path));

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.skipped, 0);

    let written = fs::read_to_string(output_path.join("ox_inventory_items.txt")).unwrap();
    assert_eq!(
        written,
        "['pistol'] = {\n    label = 'Pistol',\n    weight = 200,\n    stack = true,\n    close = true,\n},\n['rifle'] = {\n    label = 'Rifle',\n    weight = 4000,\n    stack = true,\n    close = true,\n},\n"
    );
}

#[test]
fn test_conversion_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let list_path = temp_dir.path().join("items.txt");
    fs::write(&list_path, "bandage,Bandage,115\nlockpick,Lockpick,300\n").unwrap();

    let mut config = RunConfig::new(Framework::Qbcore);
    config.output_path = output_path.to_str().unwrap().to_string();

    run_once(config.clone(), RecordSource::Notepad(list_path.clone()));
    let first = fs::read(output_path.join("qb_items.txt")).unwrap();

    run_once(config, RecordSource::Notepad(list_path));
    let second = fs::read(output_path.join("qb_items.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_end_to_end_image_folder_items() {
    let temp_dir = TempDir::new().unwrap();
    let images = temp_dir.path().join("icons");
    fs::create_dir(&images).unwrap();
    fs::write(images.join("bandage.png"), b"\x89PNG").unwrap();
    fs::write(images.join("radio.png"), b"\x89PNG").unwrap();
    fs::write(images.join("notes.md"), b"not an image").unwrap();

    let output_path = temp_dir.path().join("out");
    let mut config = RunConfig::new(Framework::OxInventory);
    config.output_path = output_path.to_str().unwrap().to_string();

    let summary = run_once(config, RecordSource::Images(images));

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.skipped, 1);

    let written = fs::read_to_string(output_path.join("ox_inventory_items.txt")).unwrap();
    assert!(written.contains("['bandage'] = {\n    label = 'Bandage',\n    weight = 100,"));
    assert!(written.contains("['radio'] ="));
    assert!(!written.contains("notes"));
}

#[test]
fn test_empty_source_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let list_path = temp_dir.path().join("empty.txt");
    fs::write(&list_path, "\n\n").unwrap();

    let mut config = RunConfig::new(Framework::OxInventory);
    config.output_path = output_path.to_str().unwrap().to_string();

    let summary = run_once(config, RecordSource::Notepad(list_path));

    assert!(summary.destination.is_none());
    assert!(!output_path.join("ox_inventory_items.txt").exists());
}

#[test]
fn test_malformed_line_aborts_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let list_path = temp_dir.path().join("items.txt");
    fs::write(&list_path, "pistol,Pistol,200\nbroken line\n").unwrap();

    let mut config = RunConfig::new(Framework::OxInventory);
    config.output_path = output_path.to_str().unwrap().to_string();

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ConvertPipeline::new(storage, config, RecordSource::Notepad(list_path));
    let result = ConvertEngine::new(pipeline).run();

    assert!(result.is_err());
    assert!(!output_path.join("ox_inventory_items.txt").exists());
}

#[test]
fn test_output_name_override_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let list_path = temp_dir.path().join("items.txt");
    fs::write(&list_path, "pistol,Pistol,200\n").unwrap();

    let mut config = RunConfig::new(Framework::OxInventory);
    config.output_path = output_path.to_str().unwrap().to_string();
    config.output_names.items = Some("shared_items.lua".to_string());

    let summary = run_once(config, RecordSource::Notepad(list_path));

    assert!(summary.destination.unwrap().ends_with("shared_items.lua"));
    assert!(output_path.join("shared_items.lua").exists());
}

#[test]
fn test_pipeline_phases_compose() {
    // The engine drives the same three calls a caller could make directly.
    let temp_dir = TempDir::new().unwrap();
    let list_path = temp_dir.path().join("items.txt");
    fs::write(&list_path, "pistol,Pistol,200\n").unwrap();

    let mut config = RunConfig::new(Framework::OxInventory);
    config.output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ConvertPipeline::new(storage, config, RecordSource::Notepad(list_path));

    let extraction = pipeline.extract().unwrap();
    let transformed = pipeline.transform(extraction.records).unwrap();
    assert_eq!(transformed.lines.len(), 1);

    let destination = pipeline.load(transformed).unwrap();
    assert!(destination.ends_with("ox_inventory_items.txt"));
}
