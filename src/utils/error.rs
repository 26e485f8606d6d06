use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
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

    #[error("Exercise '{exercise}' expects a sequence, got: {value}")]
    NotASequence { exercise: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl KataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::ConfigError { .. }
            | KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KataError::NotASequence { .. } => ErrorCategory::Input,
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KataError::ConfigValidationError { .. } | KataError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            KataError::ConfigError { .. } | KataError::NotASequence { .. } => ErrorSeverity::High,
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::IoError(e) => format!("Could not read or write a file: {}", e),
            KataError::SerializationError(e) => format!("Could not encode a result: {}", e),
            KataError::ConfigError { message } => format!("Invalid configuration: {}", message),
            KataError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            KataError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an accepted value for '{}'", value, field)
            }
            KataError::NotASequence { exercise, value } => {
                format!("{} needs an array input, but received {}", exercise, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the TOML file against the documented [kata] / [[exercises]] layout".to_string()
            }
            ErrorCategory::Input => {
                "Make sure every case of clone_array, no_repeated and reverse is an array".to_string()
            }
            ErrorCategory::System => "Check file permissions and retry".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
