//! Anchored features
//!
//! An anchored feature is computed directly from input rows by a row
//! transformation. It is the leaf of every feature graph.

use super::keys::{realias_keys, resolve_feature_alias, resolve_key_alias, resolve_keys};
use super::{FeatureLike, KeyAliases, Keys};
use crate::config::ToFeatureConfig;
use crate::error::Result;
use crate::key::TypedKey;
use crate::transformation::RowTransformation;
use crate::types::FeatureType;
use std::sync::Arc;

/// A named, typed, keyed value computed by one row transformation
///
/// `Clone` shares the key list and transformation with the original.
/// [`FeatureLike::deep_clone`] reallocates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    feature_type: FeatureType,
    key: Arc<[TypedKey]>,
    transform: Arc<RowTransformation>,
    feature_alias: String,
    key_alias: Arc<[String]>,
}

/// Builder for [`Feature`]
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    name: String,
    feature_type: FeatureType,
    key: Option<Keys>,
    transform: Option<RowTransformation>,
    feature_alias: Option<String>,
    key_alias: Option<KeyAliases>,
}

impl Feature {
    /// Create a keyless feature that passes through the field named `name`
    pub fn new(name: impl Into<String>, feature_type: FeatureType) -> Self {
        Self::builder(name, feature_type).build()
    }

    /// Start building a feature
    pub fn builder(name: impl Into<String>, feature_type: FeatureType) -> FeatureBuilder {
        FeatureBuilder {
            name: name.into(),
            feature_type,
            key: None,
            transform: None,
            feature_alias: None,
            key_alias: None,
        }
    }
}

impl FeatureBuilder {
    /// Set the key (one key or a list)
    pub fn key(mut self, key: impl Into<Keys>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the row transformation (an expression string or a transformation)
    pub fn transform(mut self, transform: impl Into<RowTransformation>) -> Self {
        self.transform = Some(transform.into());
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

    /// Build the feature, filling in defaults for everything not set
    pub fn build(self) -> Feature {
        let key = resolve_keys(self.key);
        let transform = self
            .transform
            .unwrap_or_else(|| RowTransformation::field_reference(self.name.clone()));
        let key_alias = resolve_key_alias(&key, self.key_alias);
        let feature_alias = resolve_feature_alias(&self.name, self.feature_alias);

        Feature {
            name: self.name,
            feature_type: self.feature_type,
            key,
            transform: Arc::new(transform),
            feature_alias,
            key_alias,
        }
    }
}

impl FeatureLike for Feature {
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
        Feature {
            name: self.name.clone(),
            feature_type: self.feature_type,
            key: self.key.iter().cloned().collect(),
            transform: Arc::new(self.transform.as_ref().clone()),
            feature_alias: self.feature_alias.clone(),
            key_alias: self.key_alias.iter().cloned().collect(),
        }
    }

    fn try_with_key(&self, key_alias: impl Into<KeyAliases>) -> Result<Self> {
        let key_alias = key_alias.into();
        let (key, key_alias) = realias_keys(&self.key, &key_alias)?;
        log::debug!("Re-keying feature '{}' with key alias {:?}", self.name, key_alias);

        let mut res = self.deep_clone();
        res.key = key;
        res.key_alias = key_alias;
        Ok(res)
    }

    fn as_feature(&self, feature_alias: impl Into<String>) -> Self {
        let mut res = self.deep_clone();
        res.feature_alias = feature_alias.into();
        log::debug!("Aliasing feature '{}' as '{}'", self.name, res.feature_alias);
        res
    }
}

impl ToFeatureConfig for Feature {
    fn to_feature_config(&self) -> String {
        log::trace!("Rendering feature config for '{}'", self.name);
        format!(
            "{}: {{\n    def: {}\n    {}\n}}\n",
            self.name,
            self.transform.to_feature_config(),
            self.feature_type.to_feature_config()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType;
    use crate::{Aggregation, WindowAggTransformation};

    fn location_key() -> TypedKey {
        TypedKey::new("DOLocationID", ValueType::Int32).with_alias("location")
    }

    #[test]
    fn test_default_transform_references_name() {
        let f = Feature::new("trip_distance", FeatureType::Float);
        assert_eq!(f.transform(), &RowTransformation::expression("trip_distance"));
    }

    #[test]
    fn test_string_transform_is_expression() {
        let f = Feature::builder("f_double", FeatureType::Double)
            .transform("fare * 2")
            .build();
        assert_eq!(f.transform(), &RowTransformation::expression("fare * 2"));
    }

    #[test]
    fn test_default_key_is_dummy() {
        let f = Feature::new("f", FeatureType::Int32);
        assert_eq!(f.key().len(), 1);
        assert!(f.key()[0].is_dummy());
        assert_eq!(f.key_alias(), ["NOT_NEEDED".to_string()]);
    }

    #[test]
    fn test_keyless_features_share_default_key_list() {
        let a = Feature::new("a", FeatureType::Int32);
        let b = Feature::new("b", FeatureType::Int32);
        assert!(std::ptr::eq(a.key().as_ptr(), b.key().as_ptr()));
    }

    #[test]
    fn test_shallow_clone_shares_nested_values() {
        let f = Feature::builder("f", FeatureType::Int32).key(location_key()).build();
        let g = f.clone();
        assert!(std::ptr::eq(f.key().as_ptr(), g.key().as_ptr()));
        assert!(std::ptr::eq(f.transform(), g.transform()));
    }

    #[test]
    fn test_deep_clone_reallocates_nested_values() {
        let f = Feature::builder("f", FeatureType::Int32).key(location_key()).build();
        let g = f.deep_clone();
        assert_eq!(f, g);
        assert!(!std::ptr::eq(f.key().as_ptr(), g.key().as_ptr()));
        assert!(!std::ptr::eq(f.transform(), g.transform()));
    }

    #[test]
    fn test_explicit_aliases() {
        let f = Feature::builder("f", FeatureType::Int32)
            .key(location_key())
            .feature_alias("pickup")
            .key_alias("loc")
            .build();
        assert_eq!(f.feature_alias(), "pickup");
        assert_eq!(f.key_alias(), ["loc".to_string()]);
        // the key itself keeps its embedded alias
        assert_eq!(f.key()[0].key_column_alias, "location");
    }

    #[test]
    fn test_window_agg_feature_config() {
        let f = Feature::builder("f_fare_7d", FeatureType::Float)
            .key(location_key())
            .transform(WindowAggTransformation::new("fare", Aggregation::Sum, "7d"))
            .build();
        let config = f.to_feature_config();
        assert!(config.starts_with("f_fare_7d: {\n    def: \"fare\"\n    window: 7d\n"));
        assert!(config.contains("aggregation: SUM"));
    }

    #[test]
    fn test_feature_config_layout() {
        let f = Feature::new("f1", FeatureType::Boolean);
        let expected = format!(
            "f1: {{\n    def: \"f1\"\n    {}\n}}\n",
            FeatureType::Boolean.to_feature_config()
        );
        assert_eq!(f.to_feature_config(), expected);
    }
}
