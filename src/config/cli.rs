use crate::config::{toml_config::TomlConfig, RunConfig};
use crate::core::pipeline::RecordSource;
use crate::domain::model::Framework;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fivem-convert")]
#[command(about = "Converts modding source artifacts into FiveM framework configuration files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Target framework: ox_inventory, qbcore, qbox or esx
    #[arg(long, global = true)]
    pub framework: Option<Framework>,

    /// Destination directory for generated files
    #[arg(long, global = true)]
    pub output: Option<String>,

    /// TOML file with defaults and output overrides
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log CPU/memory usage at each phase
    #[arg(long, global = true)]
    pub monitor: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate item entries from images, a notepad list, or a CSV table
    Items {
        /// Folder of inventory .png images
        #[arg(long)]
        images: Option<PathBuf>,

        /// Text file with one name,label,weight line per item
        #[arg(long)]
        list: Option<PathBuf>,

        /// CSV file with name, label and weight columns
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Generate vehicle entries from vehicles.meta files under a directory
    Vehicles {
        #[arg(long)]
        meta: PathBuf,
    },
    /// Generate weapon entries from weapons.meta files under a directory
    Weapons {
        #[arg(long)]
        meta: PathBuf,
    },
    /// Rewrite a QBCore Lua script to its QBox equivalent
    Rewrite {
        #[arg(long)]
        script: PathBuf,
    },
}

impl Cli {
    /// The record source named on the command line; `None` for the
    /// script-rewriting mode, which does not run the record pipeline.
    pub fn record_source(&self) -> Result<Option<RecordSource>> {
        match &self.command {
            Command::Items {
                images,
                list,
                table,
            } => {
                let mut sources: Vec<RecordSource> = Vec::new();
                if let Some(dir) = images {
                    sources.push(RecordSource::Images(dir.clone()));
                }
                if let Some(path) = list {
                    sources.push(RecordSource::Notepad(path.clone()));
                }
                if let Some(path) = table {
                    sources.push(RecordSource::Table(path.clone()));
                }

                match sources.len() {
                    0 => Err(ConvertError::NoInputSelected),
                    1 => Ok(sources.pop()),
                    _ => Err(ConvertError::InvalidConfigValueError {
                        field: "items".to_string(),
                        value: "multiple sources".to_string(),
                        reason: "Pass exactly one of --images, --list, --table".to_string(),
                    }),
                }
            }
            Command::Vehicles { meta } => Ok(Some(RecordSource::VehicleMeta(meta.clone()))),
            Command::Weapons { meta } => Ok(Some(RecordSource::WeaponMeta(meta.clone()))),
            Command::Rewrite { .. } => Ok(None),
        }
    }

    /// The framework assumed when neither the flag nor the TOML file names
    /// one; items default to ox_inventory, everything else to QBCore.
    fn default_framework(&self) -> Framework {
        match self.command {
            Command::Items { .. } => Framework::OxInventory,
            _ => Framework::Qbcore,
        }
    }

    /// Resolves flags, optional TOML file, and built-in defaults into the
    /// validated config for this run (precedence: CLI > file > built-in).
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = RunConfig::new(self.default_framework());

        if let Some(path) = &self.config {
            config = config.apply_toml(&TomlConfig::from_file(path)?)?;
        }
        if let Some(framework) = self.framework {
            config.framework = framework;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_requires_exactly_one_source() {
        let cli = Cli::try_parse_from(["fivem-convert", "items"]).unwrap();
        assert!(matches!(
            cli.record_source(),
            Err(ConvertError::NoInputSelected)
        ));

        let cli = Cli::try_parse_from([
            "fivem-convert",
            "items",
            "--images",
            "./icons",
            "--list",
            "items.txt",
        ])
        .unwrap();
        assert!(cli.record_source().is_err());

        let cli = Cli::try_parse_from(["fivem-convert", "items", "--list", "items.txt"]).unwrap();
        assert!(matches!(
            cli.record_source().unwrap(),
            Some(RecordSource::Notepad(_))
        ));
    }

    #[test]
    fn test_framework_flag_overrides_entity_default() {
        let cli = Cli::try_parse_from(["fivem-convert", "items", "--list", "items.txt"]).unwrap();
        assert_eq!(cli.run_config().unwrap().framework, Framework::OxInventory);

        let cli = Cli::try_parse_from([
            "fivem-convert",
            "items",
            "--list",
            "items.txt",
            "--framework",
            "esx",
        ])
        .unwrap();
        assert_eq!(cli.run_config().unwrap().framework, Framework::Esx);
    }

    #[test]
    fn test_vehicles_default_to_qbcore() {
        let cli = Cli::try_parse_from(["fivem-convert", "vehicles", "--meta", "./dlc"]).unwrap();
        assert_eq!(cli.run_config().unwrap().framework, Framework::Qbcore);
        assert!(matches!(
            cli.record_source().unwrap(),
            Some(RecordSource::VehicleMeta(_))
        ));
    }

    #[test]
    fn test_output_flag_overrides_default_path() {
        let cli = Cli::try_parse_from([
            "fivem-convert",
            "weapons",
            "--meta",
            "./dlc",
            "--output",
            "./generated",
        ])
        .unwrap();
        assert_eq!(cli.run_config().unwrap().output_path, "./generated");
    }
}
