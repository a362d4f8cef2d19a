use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML file supplying per-run defaults. Every field has a
/// built-in fallback, so an empty file (or no file at all) is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub framework: Option<String>,
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Weight stamped onto records from sources that carry none.
    pub item_weight: Option<i64>,
    pub vehicle: Option<VehicleDefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleDefaultsConfig {
    pub brand: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub r#type: Option<String>,
    pub shop: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub items: Option<String>,
    pub vehicles: Option<String>,
    pub weapons: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConvertError::io(&path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unset variables
    /// are left as-is so the error points at the original placeholder.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("fixed placeholder pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
framework = "qbcore"

[defaults]
item_weight = 250

[defaults.vehicle]
brand = "Annis"
price = 35000

[output]
path = "./generated"
vehicles = "vehicles.lua"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.framework.as_deref(), Some("qbcore"));
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.item_weight, Some(250));
        assert_eq!(defaults.vehicle.unwrap().brand.as_deref(), Some("Annis"));
        let output = config.output.unwrap();
        assert_eq!(output.path.as_deref(), Some("./generated"));
        assert_eq!(output.vehicles.as_deref(), Some("vehicles.lua"));
        assert_eq!(output.items, None);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.framework.is_none());
        assert!(config.defaults.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CONVERT_OUTPUT", "./from-env");

        let config = TomlConfig::from_toml_str("[output]\npath = \"${TEST_CONVERT_OUTPUT}\"\n")
            .unwrap();
        assert_eq!(config.output.unwrap().path.as_deref(), Some("./from-env"));

        std::env::remove_var("TEST_CONVERT_OUTPUT");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("framework = [").unwrap_err();
        assert!(matches!(err, ConvertError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"framework = \"ox_inventory\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.framework.as_deref(), Some("ox_inventory"));
    }
}
