//! Feature value types
//!
//! Every feature type is rendered as a dense tensor. Scalars have no
//! dimensions, vectors have a single `INT` dimension.

use crate::config::ToFeatureConfig;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value type of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    Boolean,
    Int32,
    Int64,
    Float,
    Double,
    String,
    Bytes,
    Int32Vector,
    Int64Vector,
    FloatVector,
    DoubleVector,
}

impl FeatureType {
    /// Name of this feature type as written in definitions
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Boolean => "BOOLEAN",
            FeatureType::Int32 => "INT32",
            FeatureType::Int64 => "INT64",
            FeatureType::Float => "FLOAT",
            FeatureType::Double => "DOUBLE",
            FeatureType::String => "STRING",
            FeatureType::Bytes => "BYTES",
            FeatureType::Int32Vector => "INT32_VECTOR",
            FeatureType::Int64Vector => "INT64_VECTOR",
            FeatureType::FloatVector => "FLOAT_VECTOR",
            FeatureType::DoubleVector => "DOUBLE_VECTOR",
        }
    }

    /// Whether values of this type carry one dimension
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            FeatureType::Int32Vector
                | FeatureType::Int64Vector
                | FeatureType::FloatVector
                | FeatureType::DoubleVector
        )
    }

    /// Tensor element type used by the feature config
    fn val_type(&self) -> &'static str {
        match self {
            FeatureType::Boolean => "BOOLEAN",
            FeatureType::Int32 | FeatureType::Int32Vector => "INT",
            FeatureType::Int64 | FeatureType::Int64Vector => "LONG",
            FeatureType::Float | FeatureType::FloatVector => "FLOAT",
            FeatureType::Double | FeatureType::DoubleVector => "DOUBLE",
            FeatureType::String => "STRING",
            FeatureType::Bytes => "BYTES",
        }
    }
}

impl ToFeatureConfig for FeatureType {
    fn to_feature_config(&self) -> String {
        let dimension_type = if self.is_vector() { "INT" } else { "" };
        format!(
            "type: {{\n        type: TENSOR\n        tensorCategory: DENSE\n        dimensionType: [{}]\n        valType: {}\n    }}",
            dimension_type,
            self.val_type()
        )
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BOOLEAN" | "BOOL" => Ok(FeatureType::Boolean),
            "INT32" | "INT" => Ok(FeatureType::Int32),
            "INT64" | "LONG" => Ok(FeatureType::Int64),
            "FLOAT" => Ok(FeatureType::Float),
            "DOUBLE" => Ok(FeatureType::Double),
            "STRING" => Ok(FeatureType::String),
            "BYTES" => Ok(FeatureType::Bytes),
            "INT32_VECTOR" => Ok(FeatureType::Int32Vector),
            "INT64_VECTOR" => Ok(FeatureType::Int64Vector),
            "FLOAT_VECTOR" => Ok(FeatureType::FloatVector),
            "DOUBLE_VECTOR" => Ok(FeatureType::DoubleVector),
            _ => Err(CoreError::UnknownFeatureType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_type_config() {
        let config = FeatureType::Int32.to_feature_config();
        assert!(config.starts_with("type: {"));
        assert!(config.contains("type: TENSOR"));
        assert!(config.contains("tensorCategory: DENSE"));
        assert!(config.contains("dimensionType: []"));
        assert!(config.contains("valType: INT\n"));
        assert!(config.trim_end().ends_with('}'));
    }

    #[test]
    fn test_vector_type_config() {
        let config = FeatureType::FloatVector.to_feature_config();
        assert!(config.contains("dimensionType: [INT]"));
        assert!(config.contains("valType: FLOAT"));
    }

    #[test]
    fn test_int64_renders_as_long() {
        assert!(FeatureType::Int64.to_feature_config().contains("valType: LONG"));
        assert!(FeatureType::Int64Vector
            .to_feature_config()
            .contains("valType: LONG"));
    }

    #[test]
    fn test_feature_type_from_str() {
        assert_eq!("float_vector".parse::<FeatureType>().unwrap(), FeatureType::FloatVector);
        assert_eq!("LONG".parse::<FeatureType>().unwrap(), FeatureType::Int64);
        assert!(matches!(
            "MAP".parse::<FeatureType>(),
            Err(CoreError::UnknownFeatureType(_))
        ));
    }

    #[test]
    fn test_feature_type_display_round_trips_through_from_str() {
        for ty in [FeatureType::Boolean, FeatureType::DoubleVector, FeatureType::Bytes] {
            assert_eq!(ty.to_string().parse::<FeatureType>().unwrap(), ty);
        }
    }
}
