use thiserror::Error;

/// Error types for the fallible string operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringsError {
    // Caller errors
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // Resource errors
    #[error("Capacity exceeded: requested {requested} bytes, limit is {limit}")]
    CapacityExceeded { requested: u128, limit: usize },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StringsError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create a capacity error
    pub fn capacity_exceeded(requested: u128, limit: usize) -> Self {
        Self::CapacityExceeded { requested, limit }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if the caller can recover, e.g. with a smaller count or a raised limit
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::CapacityExceeded { .. } => true,
            Self::InvalidArgument { .. } | Self::Configuration { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "argument",
            Self::CapacityExceeded { .. } => "capacity",
            Self::Configuration { .. } => "configuration",
        }
    }
}

/// Result type alias for the fallible string operations
pub type StringsResult<T> = std::result::Result<T, StringsError>;

impl From<toml::de::Error> for StringsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration { message: err.to_string() }
    }
}

impl From<toml::ser::Error> for StringsError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Configuration { message: err.to_string() }
    }
}
