use crate::utils::error::{ConvertError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed.join(", ")
            ),
        }),
        None => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ConvertError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./output").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("defaults.item_weight", 100, 0).is_ok());
        assert!(validate_positive_number("defaults.item_weight", -5, 0).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("script", "client.lua", &["lua"]).is_ok());
        assert!(validate_file_extension("script", "client.txt", &["lua"]).is_err());
        assert!(validate_file_extension("script", "client", &["lua"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("qbcore".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("framework", &present).is_ok());
        assert!(validate_required_field("framework", &absent).is_err());
    }
}
