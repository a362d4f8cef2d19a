//! One pipeline for every record-based conversion, parameterized by the
//! record source (which fixes the entity kind) and the active framework
//! from the config. This replaces a per-variant script per source kind with
//! a single engine-driven path.

use crate::core::{convert, extractors, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{EntityKind, Extraction, Record, TransformResult};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Where the records come from. The source kind implies the entity kind, so
/// invalid combinations (an image folder of vehicles, say) cannot be built.
#[derive(Debug, Clone)]
pub enum RecordSource {
    /// Folder of inventory images; file names become item names.
    Images(PathBuf),
    /// Plain `name,label,weight` list, one item per line.
    Notepad(PathBuf),
    /// CSV with a header row naming `name`, `label`, `weight`.
    Table(PathBuf),
    /// Directory tree scanned recursively for `vehicles.meta` files.
    VehicleMeta(PathBuf),
    /// Directory tree scanned recursively for `weapons.meta` files.
    WeaponMeta(PathBuf),
}

impl RecordSource {
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::Images(_) | Self::Notepad(_) | Self::Table(_) => EntityKind::Item,
            Self::VehicleMeta(_) => EntityKind::Vehicle,
            Self::WeaponMeta(_) => EntityKind::Weapon,
        }
    }
}

pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: RecordSource,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C, source: RecordSource) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.source.entity()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    fn extract(&self) -> Result<Extraction> {
        match &self.source {
            RecordSource::Images(dir) => extractors::images::extract(dir, self.config.item_weight()),
            RecordSource::Notepad(path) => extractors::delimited::extract(path),
            RecordSource::Table(path) => extractors::csv_table::extract(path),
            RecordSource::VehicleMeta(root) => {
                extractors::meta_scan::extract_vehicles(root, &self.config.vehicle_defaults())
            }
            RecordSource::WeaponMeta(root) => {
                extractors::meta_scan::extract_weapons(root, self.config.item_weight())
            }
        }
    }

    fn transform(&self, records: Vec<Record>) -> Result<TransformResult> {
        let lines = convert::render_lines(&records, self.entity(), self.config.framework())?;
        Ok(TransformResult::from_lines(lines))
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let file_name = self.config.output_file(self.entity());
        self.storage.write_file(&file_name, result.output.as_bytes())?;
        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}
