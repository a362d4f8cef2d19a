#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

use crate::core::convert;
use crate::domain::model::{EntityKind, Framework, VehicleDefaults};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_ITEM_WEIGHT: i64 = 100;

/// The fully-resolved configuration for one conversion run: CLI flags
/// layered over the optional TOML file, layered over built-in defaults.
/// This is the only `ConfigProvider` the shipped binaries use; an embedding
/// GUI would build one the same way.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_path: String,
    pub framework: Framework,
    pub item_weight: i64,
    pub vehicle: VehicleDefaults,
    pub output_names: OutputNames,
}

/// Optional per-entity destination file names; `None` falls back to the
/// framework-specific default.
#[derive(Debug, Clone, Default)]
pub struct OutputNames {
    pub items: Option<String>,
    pub vehicles: Option<String>,
    pub weapons: Option<String>,
}

impl RunConfig {
    pub fn new(framework: Framework) -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            framework,
            item_weight: DEFAULT_ITEM_WEIGHT,
            vehicle: VehicleDefaults::default(),
            output_names: OutputNames::default(),
        }
    }

    /// Layers TOML file values over this config. CLI-provided values are
    /// applied afterwards by the caller, so the precedence stays
    /// CLI > file > built-in.
    pub fn apply_toml(mut self, file: &TomlConfig) -> Result<Self> {
        if let Some(framework) = &file.framework {
            self.framework = framework.parse()?;
        }

        if let Some(defaults) = &file.defaults {
            if let Some(weight) = defaults.item_weight {
                self.item_weight = weight;
            }
            if let Some(vehicle) = &defaults.vehicle {
                if let Some(brand) = &vehicle.brand {
                    self.vehicle.brand = brand.clone();
                }
                if let Some(price) = vehicle.price {
                    self.vehicle.price = price;
                }
                if let Some(category) = &vehicle.category {
                    self.vehicle.category = category.clone();
                }
                if let Some(vehicle_type) = &vehicle.r#type {
                    self.vehicle.vehicle_type = vehicle_type.clone();
                }
                if let Some(shop) = &vehicle.shop {
                    self.vehicle.shop = shop.clone();
                }
            }
        }

        if let Some(output) = &file.output {
            if let Some(path) = &output.path {
                self.output_path = path.clone();
            }
            if let Some(items) = &output.items {
                self.output_names.items = Some(items.clone());
            }
            if let Some(vehicles) = &output.vehicles {
                self.output_names.vehicles = Some(vehicles.clone());
            }
            if let Some(weapons) = &output.weapons {
                self.output_names.weapons = Some(weapons.clone());
            }
        }

        Ok(self)
    }
}

impl ConfigProvider for RunConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn framework(&self) -> Framework {
        self.framework
    }

    fn item_weight(&self) -> i64 {
        self.item_weight
    }

    fn vehicle_defaults(&self) -> VehicleDefaults {
        self.vehicle.clone()
    }

    fn output_file(&self, entity: EntityKind) -> String {
        let override_name = match entity {
            EntityKind::Item => &self.output_names.items,
            EntityKind::Vehicle => &self.output_names.vehicles,
            EntityKind::Weapon => &self.output_names.weapons,
        };
        override_name
            .clone()
            .unwrap_or_else(|| convert::default_output_name(entity, self.framework))
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output", &self.output_path)?;
        validate_positive_number("defaults.item_weight", self.item_weight, 0)?;
        validate_positive_number("defaults.vehicle.price", self.vehicle.price, 0)?;
        validate_non_empty_string("defaults.vehicle.brand", &self.vehicle.brand)?;
        validate_non_empty_string("defaults.vehicle.category", &self.vehicle.category)?;
        validate_non_empty_string("defaults.vehicle.type", &self.vehicle.vehicle_type)?;
        validate_non_empty_string("defaults.vehicle.shop", &self.vehicle.shop)?;
        Ok(())
    }
}
