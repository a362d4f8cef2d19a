use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No input selected")]
    NoInputSelected,

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Required column '{name}' is missing from the header row")]
    MissingColumn { name: String },

    #[error("Record '{record}' is missing required field '{field}'")]
    MissingField { record: String, field: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error at {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
    Processing,
}

impl ConvertError {
    /// Wraps an IO error with the path that triggered it.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoInputSelected
            | Self::MalformedRecord { .. }
            | Self::MissingColumn { .. }
            | Self::MissingField { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Config,
            Self::CsvError(_) | Self::IoError { .. } => ErrorCategory::Io,
            Self::PatternError(_) | Self::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NoInputSelected => "No source file or folder was selected.".to_string(),
            Self::MalformedRecord { line, reason } => {
                format!("Line {} of the input could not be parsed: {}.", line, reason)
            }
            Self::MissingColumn { name } => {
                format!("The input table has no '{}' column.", name)
            }
            Self::MissingField { record, field } => {
                format!("Entry '{}' has no '{}' value.", record, field)
            }
            Self::IoError { path, .. } => format!("Could not read or write '{}'.", path),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Fix the reported line or entry in the source file and run again"
            }
            ErrorCategory::Config => "Check the command-line flags and the TOML config file",
            ErrorCategory::Io => "Check that the path exists and is readable/writable",
            ErrorCategory::Processing => "Re-run with --verbose and report the full log",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
