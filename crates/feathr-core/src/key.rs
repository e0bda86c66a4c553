//! Typed keys
//!
//! A typed key identifies the entity grain of a feature, i.e. which column
//! joins rows to an entity. The alias is what rendered configs refer to.

use crate::types::ValueType;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Key column of the dummy key
pub const DUMMY_KEY_COLUMN: &str = "NOT_NEEDED";

/// Full name of the dummy key
pub const DUMMY_KEY_FULL_NAME: &str = "feathr.dummy_typedkey";

/// A key column with its type and display alias
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedKey {
    /// Column holding the key value
    pub key_column: String,

    /// Type of the key column
    pub key_column_type: ValueType,

    /// Fully qualified name of the key, e.g. `nyc_taxi.location_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name used for the key in rendered configs
    pub key_column_alias: String,
}

impl TypedKey {
    /// Create a key whose alias is the key column itself
    pub fn new(key_column: impl Into<String>, key_column_type: ValueType) -> Self {
        let key_column = key_column.into();
        Self {
            key_column_alias: key_column.clone(),
            key_column,
            key_column_type,
            full_name: None,
            description: None,
        }
    }

    /// Set the full name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the key column alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.key_column_alias = alias.into();
        self
    }

    /// Whether this is the sentinel used by keyless features
    pub fn is_dummy(&self) -> bool {
        self.key_column == DUMMY_KEY_COLUMN
            && self.full_name.as_deref() == Some(DUMMY_KEY_FULL_NAME)
    }
}

/// Sentinel key for passthrough and request features that have no real key
///
/// The instance is shared process-wide and read-only. Re-keying clones it
/// before changing the alias.
pub fn dummy_key() -> &'static TypedKey {
    static DUMMY_KEY: OnceLock<TypedKey> = OnceLock::new();
    DUMMY_KEY.get_or_init(|| {
        TypedKey::new(DUMMY_KEY_COLUMN, ValueType::Unspecified)
            .with_full_name(DUMMY_KEY_FULL_NAME)
            .with_description("A dummy typed key for passthrough/request feature.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_defaults_to_key_column() {
        let key = TypedKey::new("user_id", ValueType::Int64);
        assert_eq!(key.key_column_alias, "user_id");
        assert!(key.full_name.is_none());
    }

    #[test]
    fn test_with_alias() {
        let key = TypedKey::new("user_id", ValueType::Int64).with_alias("uid");
        assert_eq!(key.key_column, "user_id");
        assert_eq!(key.key_column_alias, "uid");
    }

    #[test]
    fn test_dummy_key() {
        let key = dummy_key();
        assert_eq!(key.key_column, DUMMY_KEY_COLUMN);
        assert_eq!(key.key_column_alias, DUMMY_KEY_COLUMN);
        assert_eq!(key.key_column_type, ValueType::Unspecified);
        assert!(key.is_dummy());
        assert!(std::ptr::eq(key, dummy_key()));
    }

    #[test]
    fn test_regular_key_is_not_dummy() {
        assert!(!TypedKey::new(DUMMY_KEY_COLUMN, ValueType::Unspecified).is_dummy());
    }
}
