use std::fmt;

use crate::core::config::ConfigError;

/// Custom error type for registry operations.
#[derive(Debug)]
pub enum RegistryError {
    /// Configuration-related errors.
    ConfigError(String),
    /// Lookup by id matched no record.
    NotFound(String),
    /// Validation errors.
    ValidationError(String),
    /// Serialization/deserialization errors.
    SerializationError(String),
    /// IO errors.
    IoError(String),
    /// Internal errors.
    InternalError(String),
    /// Generic errors.
    Other(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RegistryError::NotFound(msg) => write!(f, "Not found: {}", msg),
            RegistryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RegistryError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            RegistryError::IoError(msg) => write!(f, "IO error: {}", msg),
            RegistryError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            RegistryError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for RegistryError {}

impl RegistryError {
    /// Create a generic error.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Whether the error is the terminal "record absent" signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}

impl From<anyhow::Error> for RegistryError {
    fn from(err: anyhow::Error) -> Self {
        RegistryError::Other(err.to_string())
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::SerializationError(err.to_string())
    }
}

impl From<ConfigError> for RegistryError {
    fn from(err: ConfigError) -> Self {
        RegistryError::ConfigError(err.to_string())
    }
}
