//! Derived features
//!
//! A derived feature computes its value from the values of other features,
//! referenced by their feature alias and key alias at the time they were
//! passed in. Input graphs are expected to be acyclic; nothing here walks
//! them beyond one level.

use super::keys::{realias_keys, resolve_feature_alias, resolve_key_alias, resolve_keys};
use super::{FeatureInput, FeatureInputs, FeatureLike, KeyAliases, Keys};
use crate::config::{join_aliases, ToFeatureConfig};
use crate::error::Result;
use crate::key::TypedKey;
use crate::transformation::RowTransformation;
use crate::types::FeatureType;
use std::sync::Arc;

/// A named, typed, keyed value computed from other features
///
/// `Clone` shares keys, transformation and inputs with the original.
/// [`FeatureLike::deep_clone`] reallocates them, recursing into inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFeature {
    name: String,
    feature_type: FeatureType,
    key: Arc<[TypedKey]>,
    input_features: Arc<[FeatureInput]>,
    transform: Arc<RowTransformation>,
    feature_alias: String,
    key_alias: Arc<[String]>,
}

/// Builder for [`DerivedFeature`]
#[derive(Debug, Clone)]
pub struct DerivedFeatureBuilder {
    name: String,
    feature_type: FeatureType,
    input_features: FeatureInputs,
    transform: RowTransformation,
    key: Option<Keys>,
    feature_alias: Option<String>,
    key_alias: Option<KeyAliases>,
}

impl DerivedFeature {
    /// Create a keyless derived feature
    pub fn new(
        name: impl Into<String>,
        feature_type: FeatureType,
        input_features: impl Into<FeatureInputs>,
        transform: impl Into<RowTransformation>,
    ) -> Self {
        Self::builder(name, feature_type, input_features, transform).build()
    }

    /// Start building a derived feature
    pub fn builder(
        name: impl Into<String>,
        feature_type: FeatureType,
        input_features: impl Into<FeatureInputs>,
        transform: impl Into<RowTransformation>,
    ) -> DerivedFeatureBuilder {
        DerivedFeatureBuilder {
            name: name.into(),
            feature_type,
            input_features: input_features.into(),
            transform: transform.into(),
            key: None,
            feature_alias: None,
            key_alias: None,
        }
    }

    /// Features consumed by the transformation, in declaration order
    pub fn input_features(&self) -> &[FeatureInput] {
        &self.input_features
    }
}

impl DerivedFeatureBuilder {
    /// Set the key (one key or a list)
    pub fn key(mut self, key: impl Into<Keys>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the alias other features reference this one by
    pub fn feature_alias(mut self, feature_alias: impl Into<String>) -> Self {
        self.feature_alias = Some(feature_alias.into());
        self
    }

    /// Set the key aliases
    pub fn key_alias(mut self, key_alias: impl Into<KeyAliases>) -> Self {
        self.key_alias = Some(key_alias.into());
        self
    }

    pub fn build(self) -> DerivedFeature {
        let key = resolve_keys(self.key);
        let key_alias = resolve_key_alias(&key, self.key_alias);
        let feature_alias = resolve_feature_alias(&self.name, self.feature_alias);

        DerivedFeature {
            name: self.name,
            feature_type: self.feature_type,
            key,
            input_features: self.input_features.into_inner().into(),
            transform: Arc::new(self.transform),
            feature_alias,
            key_alias,
        }
    }
}

impl FeatureLike for DerivedFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    fn key(&self) -> &[TypedKey] {
        &self.key
    }

    fn key_alias(&self) -> &[String] {
        &self.key_alias
    }

    fn feature_alias(&self) -> &str {
        &self.feature_alias
    }

    fn transform(&self) -> &RowTransformation {
        &self.transform
    }

    fn deep_clone(&self) -> Self {
        DerivedFeature {
            name: self.name.clone(),
            feature_type: self.feature_type,
            key: self.key.iter().cloned().collect(),
            input_features: self.input_features.iter().map(|input| input.deep_clone()).collect(),
            transform: Arc::new(self.transform.as_ref().clone()),
            feature_alias: self.feature_alias.clone(),
            key_alias: self.key_alias.iter().cloned().collect(),
        }
    }

    fn try_with_key(&self, key_alias: impl Into<KeyAliases>) -> Result<Self> {
        let key_alias = key_alias.into();
        let (key, key_alias) = realias_keys(&self.key, &key_alias)?;
        log::debug!(
            "Re-keying derived feature '{}' with key alias {:?}",
            self.name,
            key_alias
        );

        let mut res = self.deep_clone();
        res.key = key;
        res.key_alias = key_alias;
        Ok(res)
    }

    fn as_feature(&self, feature_alias: impl Into<String>) -> Self {
        let mut res = self.deep_clone();
        res.feature_alias = feature_alias.into();
        log::debug!(
            "Aliasing derived feature '{}' as '{}'",
            self.name,
            res.feature_alias
        );
        res
    }
}

impl ToFeatureConfig for DerivedFeature {
    fn to_feature_config(&self) -> String {
        log::trace!(
            "Rendering derived feature config for '{}' with {} inputs",
            self.name,
            self.input_features.len()
        );

        let inputs: String = self
            .input_features
            .iter()
            .map(|input| {
                format!(
                    "        {}: {{\n            key: [{}],\n            feature: {}\n        }}\n",
                    input.feature_alias(),
                    join_aliases(input.key_alias()),
                    input.name()
                )
            })
            .collect();

        format!(
            "{}: {{\n    key: [{}]\n    inputs: {{\n{}    }}\n    definition: {}\n    {}\n}}\n",
            self.name,
            join_aliases(&self.key_alias),
            inputs,
            self.transform.to_feature_config(),
            self.feature_type.to_feature_config()
        )
    }
}
