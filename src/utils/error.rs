use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown example: {name}")]
    UnknownExample { name: String },

    #[error("Example '{example}' failed: {details}")]
    ExampleFailed { example: String, details: String },
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::UnknownExample { .. }
            | CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            CatalogError::ExampleFailed { .. } | CatalogError::SerializationError(_) => {
                ErrorSeverity::High
            }
            CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not write example output: {}", e),
            CatalogError::SerializationError(e) => {
                format!("Could not render the run summary: {}", e)
            }
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}' ({})", value, field, reason)
            }
            CatalogError::UnknownExample { name } => {
                format!("There is no example called '{}'", name)
            }
            CatalogError::ExampleFailed { example, details } => {
                format!("The '{}' example stopped: {}", example, details)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that stdout is writable (closed pipe?)",
            CatalogError::SerializationError(_) => "Run again without --summary",
            CatalogError::ConfigError { .. } | CatalogError::ConfigValidationError { .. } => {
                "Check the TOML file syntax and section names"
            }
            CatalogError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file or CLI flags"
            }
            CatalogError::UnknownExample { .. } => "Run with --list to see the available examples",
            CatalogError::ExampleFailed { .. } => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
