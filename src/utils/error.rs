use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for config '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid profile field '{field}' = {value}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GrowthError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GrowthError::InvalidField { .. } | GrowthError::SerializationError(_) => {
                ErrorCategory::Input
            }
            GrowthError::ConfigError { .. } | GrowthError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            GrowthError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GrowthError::IoError(e) => format!("Could not read input: {}", e),
            GrowthError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            GrowthError::ConfigError { message } => format!("Configuration problem: {}", message),
            GrowthError::InvalidConfigValue { field, reason, .. } => {
                format!("Config value '{}' is invalid: {}", field, reason)
            }
            GrowthError::InvalidField { field, reason, .. } => {
                format!("Vendor profile field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GrowthError::IoError(_) => "Check that the file path exists and is readable",
            GrowthError::SerializationError(_) => "Make sure the file contains a JSON object",
            GrowthError::ConfigError { .. } | GrowthError::InvalidConfigValue { .. } => {
                "Fix the TOML configuration file or run without --config"
            }
            GrowthError::InvalidField { .. } => {
                "Use non-negative numbers for budget/time_per_week and strings for goal/category"
            }
        }
    }

    pub(crate) fn invalid_field(field: &str, value: impl ToString, reason: &str) -> Self {
        GrowthError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;
