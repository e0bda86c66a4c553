//! Type system for Feathr features
//!
//! This module contains:
//! - Value types for key columns
//! - Feature value types and their config rendering

pub mod feature_type;
pub mod value_type;

pub use feature_type::FeatureType;
pub use value_type::ValueType;
