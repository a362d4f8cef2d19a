use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Target configuration dialect. Exactly one framework is active per
/// conversion run and it is always passed explicitly, never read from
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    OxInventory,
    Qbcore,
    Qbox,
    Esx,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OxInventory => "ox_inventory",
            Self::Qbcore => "qbcore",
            Self::Qbox => "qbox",
            Self::Esx => "esx",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ox_inventory" | "ox" => Ok(Self::OxInventory),
            "qbcore" | "qb-core" | "qb" => Ok(Self::Qbcore),
            "qbox" | "qbx" => Ok(Self::Qbox),
            "esx" => Ok(Self::Esx),
            other => Err(ConvertError::InvalidConfigValueError {
                field: "framework".to_string(),
                value: other.to_string(),
                reason: "Expected one of: ox_inventory, qbcore, qbox, esx".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Item,
    Vehicle,
    Weapon,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Item => "items",
            Self::Vehicle => "vehicles",
            Self::Weapon => "weapons",
        })
    }
}

/// One parsed entity (item, vehicle, weapon). Produced once by an extractor
/// and consumed once downstream; never mutated after extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: impl Into<serde_json::Value>) {
        self.data.insert(field.to_string(), value.into());
    }

    /// The record's primary key, used to identify it in error reports.
    pub fn primary_key(&self) -> &str {
        self.data
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("<unnamed>")
    }

    pub fn str_field(&self, field: &str) -> Result<&str> {
        self.data
            .get(field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ConvertError::MissingField {
                record: self.primary_key().to_string(),
                field: field.to_string(),
            })
    }

    pub fn int_field(&self, field: &str) -> Result<i64> {
        self.data
            .get(field)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| ConvertError::MissingField {
                record: self.primary_key().to_string(),
                field: field.to_string(),
            })
    }
}

/// Extractor output: the record stream plus how many directory entries the
/// extractor's documented skip policy filtered out.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub skipped: usize,
}

impl Extraction {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }
}

/// Rendered output lines plus the joined file body. Immutable once produced.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub lines: Vec<String>,
    pub output: String,
}

impl TransformResult {
    pub fn from_lines(lines: Vec<String>) -> Self {
        let output = if lines.is_empty() {
            String::new()
        } else {
            let mut joined = lines.join("\n");
            joined.push('\n');
            joined
        };
        Self { lines, output }
    }
}

/// What a completed run reports back to the caller.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub destination: Option<String>,
    pub converted: usize,
    pub skipped: usize,
}

/// Fixed default fields stamped onto every vehicle record scanned from a
/// meta file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDefaults {
    pub brand: String,
    pub price: i64,
    pub category: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub shop: String,
}

impl Default for VehicleDefaults {
    fn default() -> Self {
        Self {
            brand: "Unknown".to_string(),
            price: 20000,
            category: "unknown".to_string(),
            vehicle_type: "automobile".to_string(),
            shop: "pdm".to_string(),
        }
    }
}
