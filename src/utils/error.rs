use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Navigation,
    Lifecycle,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CarouselError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CarouselError::IndexOutOfRange { .. } => ErrorCategory::Navigation,
            CarouselError::InvalidArgument { .. } | CarouselError::InvalidState { .. } => {
                ErrorCategory::Lifecycle
            }
            CarouselError::TomlError(_)
            | CarouselError::ConfigError { .. }
            | CarouselError::InvalidConfigValueError { .. }
            | CarouselError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CarouselError::IoError(_)
            | CarouselError::SerializationError(_)
            | CarouselError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a rejected jump leaves the carousel exactly as it was
            CarouselError::IndexOutOfRange { .. } => ErrorSeverity::Low,
            CarouselError::InvalidState { .. } => ErrorSeverity::Medium,
            CarouselError::InvalidArgument { .. }
            | CarouselError::TomlError(_)
            | CarouselError::ConfigError { .. }
            | CarouselError::InvalidConfigValueError { .. }
            | CarouselError::MissingConfigError { .. } => ErrorSeverity::High,
            CarouselError::IoError(_)
            | CarouselError::SerializationError(_)
            | CarouselError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CarouselError::InvalidArgument { .. } => {
                "Provide at least one item to the carousel".to_string()
            }
            CarouselError::IndexOutOfRange { len, .. } => {
                format!("Use an index between 0 and {}", len.saturating_sub(1))
            }
            CarouselError::InvalidState { .. } => {
                "Unmount the carousel before mounting it again".to_string()
            }
            CarouselError::TomlError(_) => "Check the roster file for TOML syntax errors".to_string(),
            CarouselError::ConfigError { .. }
            | CarouselError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the roster file".to_string()
            }
            CarouselError::MissingConfigError { field } => {
                format!("Add the '{}' field to the roster file", field)
            }
            CarouselError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CarouselError::SerializationError(_) | CarouselError::CsvError(_) => {
                "Check that the output stream is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CarouselError::InvalidArgument { .. } => "The carousel has nothing to show".to_string(),
            CarouselError::IndexOutOfRange { index, len } => {
                format!("There is no item #{} (the ring holds {})", index, len)
            }
            CarouselError::InvalidState { message } => format!("Carousel busy: {}", message),
            CarouselError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
