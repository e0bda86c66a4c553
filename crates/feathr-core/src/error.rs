//! Error types for Feathr Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Key alias count mismatch: expected {expected}, got {actual}")]
    KeyAliasMismatch { expected: usize, actual: usize },

    #[error("Unknown value type: {0}")]
    UnknownValueType(String),

    #[error("Unknown feature type: {0}")]
    UnknownFeatureType(String),

    #[error("Unknown aggregation: {0}")]
    UnknownAggregation(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
