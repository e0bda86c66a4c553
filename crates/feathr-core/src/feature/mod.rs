//! Feature definitions
//!
//! Two entity kinds share one capability set:
//! - [`Feature`]: anchored feature computed from input rows
//! - [`DerivedFeature`]: feature computed from other features' values
//!
//! Both are immutable once built. Re-keying and re-aliasing return a deep
//! clone with the requested fields replaced and leave the original untouched.

pub mod anchored;
pub mod derived;
pub mod input;
pub mod keys;

pub use anchored::{Feature, FeatureBuilder};
pub use derived::{DerivedFeature, DerivedFeatureBuilder};
pub use input::{FeatureInput, FeatureInputs};
pub use keys::{KeyAliases, Keys};

use crate::config::ToFeatureConfig;
use crate::error::Result;
use crate::key::TypedKey;
use crate::transformation::RowTransformation;
use crate::types::FeatureType;

/// A renderable, keyed, aliasable feature-like entity
pub trait FeatureLike: ToFeatureConfig + Clone {
    /// Unique feature name
    fn name(&self) -> &str;

    /// Value type of the feature
    fn feature_type(&self) -> FeatureType;

    /// Keys of the feature, never empty for built entities
    fn key(&self) -> &[TypedKey];

    /// Key names used in rendered configs, one per key
    fn key_alias(&self) -> &[String];

    /// Name this feature is referenced by when used as an input
    fn feature_alias(&self) -> &str;

    /// Transformation producing the feature value
    fn transform(&self) -> &RowTransformation;

    /// Clone this entity and everything it owns, including upstream inputs
    fn deep_clone(&self) -> Self;

    /// Deep clone with every key re-aliased
    ///
    /// Fails with [`CoreError::KeyAliasMismatch`](crate::CoreError::KeyAliasMismatch)
    /// when the alias count differs from the key count.
    fn try_with_key(&self, key_alias: impl Into<KeyAliases>) -> Result<Self>;

    /// Deep clone with every key re-aliased
    ///
    /// # Panics
    ///
    /// Panics when the alias count differs from the key count.
    fn with_key(&self, key_alias: impl Into<KeyAliases>) -> Self {
        match self.try_with_key(key_alias) {
            Ok(res) => res,
            Err(e) => panic!("with_key on '{}': {}", self.name(), e),
        }
    }

    /// Deep clone referenced under a different feature alias
    fn as_feature(&self, feature_alias: impl Into<String>) -> Self;
}
