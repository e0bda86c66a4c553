//! Feathr Core - feature definitions and feature config rendering
//!
//! This crate provides the definition-layer model used to describe features:
//! - Typed keys and value types
//! - Row transformations (expressions, window aggregations)
//! - Anchored features and derived features
//! - Rendering into the brace-delimited feature config format

pub mod config;
pub mod error;
pub mod feature;
pub mod key;
pub mod transformation;
pub mod types;

// Re-export commonly used types
pub use config::ToFeatureConfig;
pub use error::{CoreError, Result};
pub use feature::{
    DerivedFeature, DerivedFeatureBuilder, Feature, FeatureBuilder, FeatureInput, FeatureInputs,
    FeatureLike, KeyAliases, Keys,
};
pub use key::{dummy_key, TypedKey};
pub use transformation::{
    Aggregation, ExpressionTransformation, RowTransformation, WindowAggTransformation,
};
pub use types::{FeatureType, ValueType};
