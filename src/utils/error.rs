use thiserror::Error;

/// Rejection of a package record. The message is the whole contract: callers
/// match on it verbatim, so `Display` prints nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum SorterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SorterError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SorterError::Validation(_) => 1,
            SorterError::ConfigError { .. }
            | SorterError::InvalidConfigValueError { .. }
            | SorterError::TomlError(_) => 2,
            SorterError::IoError(_) | SorterError::SerializationError(_) => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SorterError::Validation(e) => format!("Invalid package: {}", e),
            SorterError::IoError(e) => format!("Could not read input: {}", e),
            SorterError::SerializationError(e) => format!("Malformed JSON record: {}", e),
            SorterError::TomlError(e) => format!("Malformed configuration file: {}", e),
            SorterError::ConfigError { message } => format!("Configuration problem: {}", message),
            SorterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SorterError::Validation(_) => {
                "Supply width, height, length (cm) and mass (kg) as finite numbers greater than zero"
            }
            SorterError::IoError(_) => "Check that the file exists and is readable",
            SorterError::SerializationError(_) => {
                "Pass the record as a JSON object, e.g. {\"width\":10,\"height\":10,\"length\":10,\"mass\":5}"
            }
            SorterError::TomlError(_) => "Make sure the file is valid TOML",
            SorterError::ConfigError { .. } => "Review the command line arguments",
            SorterError::InvalidConfigValueError { .. } => {
                "Fix the listed field in the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SorterError>;
