//! Definition document schema
//!
//! These types mirror the YAML layout one-to-one. Names are resolved into
//! `feathr-core` entities by [`DefinitionParser`](crate::DefinitionParser).

use feathr_core::{Aggregation, CoreError, RowTransformation, WindowAggTransformation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete definition document
///
/// The `version` header is read separately and ignored here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefinitionDocument {
    /// Named keys features can refer to
    #[serde(default)]
    pub keys: BTreeMap<String, KeyDefinition>,

    /// Anchored features, in declaration order
    #[serde(default)]
    pub features: Vec<FeatureDefinition>,

    /// Derived features, in declaration order
    #[serde(default)]
    pub derived_features: Vec<DerivedFeatureDefinition>,
}

/// A typed key declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDefinition {
    pub key_column: String,

    /// Value type name, e.g. `INT64`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_column_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_column_alias: Option<String>,
}

/// An anchored feature declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    pub name: String,

    /// Feature type name, e.g. `FLOAT` or `INT64_VECTOR`
    #[serde(rename = "type")]
    pub feature_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<OneOrMany<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<OneOrMany<String>>,
}

/// A derived feature declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatureDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub feature_type: String,

    #[serde(default)]
    pub inputs: Vec<InputReference>,

    pub transform: TransformDefinition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<OneOrMany<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<OneOrMany<String>>,
}

/// Reference to an input feature of a derived feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputReference {
    /// Plain feature name
    Name(String),

    /// Feature name with aliasing applied before use
    Aliased {
        feature: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key_alias: Option<OneOrMany<String>>,
    },
}

impl InputReference {
    /// Name of the referenced feature
    pub fn feature(&self) -> &str {
        match self {
            InputReference::Name(name) => name,
            InputReference::Aliased { feature, .. } => feature,
        }
    }
}

/// A transformation as written in a definition
///
/// The aggregation name stays text until [`TransformDefinition::into_transformation`],
/// so unknown names are reported as such instead of as a shape mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformDefinition {
    /// Expression over input fields
    Expression(String),

    /// Window aggregation
    WindowAgg {
        agg_expr: String,
        agg_func: String,
        window: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group_by: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
}

impl TransformDefinition {
    /// Convert into a row transformation, resolving the aggregation name
    pub fn into_transformation(self) -> Result<RowTransformation, CoreError> {
        match self {
            TransformDefinition::Expression(expr) => Ok(RowTransformation::expression(expr)),
            TransformDefinition::WindowAgg {
                agg_expr,
                agg_func,
                window,
                group_by,
                filter,
                limit,
            } => {
                let agg_func = agg_func.parse::<Aggregation>()?;
                Ok(RowTransformation::WindowAgg(WindowAggTransformation {
                    agg_expr,
                    agg_func,
                    window,
                    group_by,
                    filter,
                    limit,
                }))
            }
        }
    }
}

/// A single value or a list of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}
