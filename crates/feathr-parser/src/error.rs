//! Parser error types

use feathr_core::CoreError;
use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Definition file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Key referenced but never declared
    #[error("Undefined key '{key}' referenced by '{referenced_by}'")]
    UndefinedKey { key: String, referenced_by: String },

    /// Input feature referenced before (or without) being declared
    #[error("Undefined feature '{feature}' referenced by '{referenced_by}'")]
    UndefinedFeature {
        feature: String,
        referenced_by: String,
    },

    /// Two definitions share a name
    #[error("Duplicate feature name: {0}")]
    DuplicateFeature(String),

    /// Document version not accepted in strict mode
    #[error("Unsupported definition version '{found}', expected '{supported}'")]
    UnsupportedVersion { found: String, supported: String },

    /// Error raised by the feature model
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
