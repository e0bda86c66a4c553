//! Inputs of derived features

use super::{DerivedFeature, Feature, FeatureLike, KeyAliases};
use crate::config::ToFeatureConfig;
use crate::error::Result;
use crate::key::TypedKey;
use crate::transformation::RowTransformation;
use crate::types::FeatureType;

/// A feature consumed by a derived feature
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureInput {
    Feature(Feature),
    Derived(DerivedFeature),
}

/// Normalized, ordered list of derived feature inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureInputs(Vec<FeatureInput>);

impl FeatureInputs {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<FeatureInput> {
        self.0
    }
}

impl From<Feature> for FeatureInput {
    fn from(feature: Feature) -> Self {
        FeatureInput::Feature(feature)
    }
}

impl From<DerivedFeature> for FeatureInput {
    fn from(feature: DerivedFeature) -> Self {
        FeatureInput::Derived(feature)
    }
}

impl From<&Feature> for FeatureInput {
    fn from(feature: &Feature) -> Self {
        FeatureInput::Feature(feature.clone())
    }
}

impl From<&DerivedFeature> for FeatureInput {
    fn from(feature: &DerivedFeature) -> Self {
        FeatureInput::Derived(feature.clone())
    }
}

impl From<FeatureInput> for FeatureInputs {
    fn from(input: FeatureInput) -> Self {
        FeatureInputs(vec![input])
    }
}

impl From<Feature> for FeatureInputs {
    fn from(feature: Feature) -> Self {
        FeatureInputs(vec![feature.into()])
    }
}

impl From<DerivedFeature> for FeatureInputs {
    fn from(feature: DerivedFeature) -> Self {
        FeatureInputs(vec![feature.into()])
    }
}

impl From<&Feature> for FeatureInputs {
    fn from(feature: &Feature) -> Self {
        FeatureInputs(vec![feature.into()])
    }
}

impl From<&DerivedFeature> for FeatureInputs {
    fn from(feature: &DerivedFeature) -> Self {
        FeatureInputs(vec![feature.into()])
    }
}

impl<T: Into<FeatureInput>> From<Vec<T>> for FeatureInputs {
    fn from(inputs: Vec<T>) -> Self {
        inputs.into_iter().collect()
    }
}

impl<T: Into<FeatureInput>, const N: usize> From<[T; N]> for FeatureInputs {
    fn from(inputs: [T; N]) -> Self {
        inputs.into_iter().collect()
    }
}

impl<T: Into<FeatureInput>> FromIterator<T> for FeatureInputs {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FeatureInputs(iter.into_iter().map(Into::into).collect())
    }
}

impl FeatureLike for FeatureInput {
    fn name(&self) -> &str {
        match self {
            FeatureInput::Feature(f) => f.name(),
            FeatureInput::Derived(f) => f.name(),
        }
    }

    fn feature_type(&self) -> FeatureType {
        match self {
            FeatureInput::Feature(f) => f.feature_type(),
            FeatureInput::Derived(f) => f.feature_type(),
        }
    }

    fn key(&self) -> &[TypedKey] {
        match self {
            FeatureInput::Feature(f) => f.key(),
            FeatureInput::Derived(f) => f.key(),
        }
    }

    fn key_alias(&self) -> &[String] {
        match self {
            FeatureInput::Feature(f) => f.key_alias(),
            FeatureInput::Derived(f) => f.key_alias(),
        }
    }

    fn feature_alias(&self) -> &str {
        match self {
            FeatureInput::Feature(f) => f.feature_alias(),
            FeatureInput::Derived(f) => f.feature_alias(),
        }
    }

    fn transform(&self) -> &RowTransformation {
        match self {
            FeatureInput::Feature(f) => f.transform(),
            FeatureInput::Derived(f) => f.transform(),
        }
    }

    fn deep_clone(&self) -> Self {
        match self {
            FeatureInput::Feature(f) => FeatureInput::Feature(f.deep_clone()),
            FeatureInput::Derived(f) => FeatureInput::Derived(f.deep_clone()),
        }
    }

    fn try_with_key(&self, key_alias: impl Into<KeyAliases>) -> Result<Self> {
        Ok(match self {
            FeatureInput::Feature(f) => FeatureInput::Feature(f.try_with_key(key_alias)?),
            FeatureInput::Derived(f) => FeatureInput::Derived(f.try_with_key(key_alias)?),
        })
    }

    fn as_feature(&self, feature_alias: impl Into<String>) -> Self {
        match self {
            FeatureInput::Feature(f) => FeatureInput::Feature(f.as_feature(feature_alias)),
            FeatureInput::Derived(f) => FeatureInput::Derived(f.as_feature(feature_alias)),
        }
    }
}

impl ToFeatureConfig for FeatureInput {
    fn to_feature_config(&self) -> String {
        match self {
            FeatureInput::Feature(f) => f.to_feature_config(),
            FeatureInput::Derived(f) => f.to_feature_config(),
        }
    }
}
