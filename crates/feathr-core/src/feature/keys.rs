//! Key and key alias normalization
//!
//! Accepted input shapes (one key or many, one alias or many) are converted
//! into a single canonical list before anything is stored on an entity.

use crate::error::{CoreError, Result};
use crate::key::{dummy_key, TypedKey};
use std::sync::{Arc, OnceLock};

/// Normalized list of typed keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys(Vec<TypedKey>);

/// Normalized list of key aliases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAliases(Vec<String>);

impl Keys {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<TypedKey> {
        self.0
    }
}

impl KeyAliases {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<TypedKey> for Keys {
    fn from(key: TypedKey) -> Self {
        Keys(vec![key])
    }
}

impl From<&TypedKey> for Keys {
    fn from(key: &TypedKey) -> Self {
        Keys(vec![key.clone()])
    }
}

impl From<Vec<TypedKey>> for Keys {
    fn from(keys: Vec<TypedKey>) -> Self {
        Keys(keys)
    }
}

impl From<&[TypedKey]> for Keys {
    fn from(keys: &[TypedKey]) -> Self {
        Keys(keys.to_vec())
    }
}

impl<const N: usize> From<[TypedKey; N]> for Keys {
    fn from(keys: [TypedKey; N]) -> Self {
        Keys(keys.into())
    }
}

impl From<&str> for KeyAliases {
    fn from(alias: &str) -> Self {
        KeyAliases(vec![alias.to_string()])
    }
}

impl From<String> for KeyAliases {
    fn from(alias: String) -> Self {
        KeyAliases(vec![alias])
    }
}

impl From<Vec<String>> for KeyAliases {
    fn from(aliases: Vec<String>) -> Self {
        KeyAliases(aliases)
    }
}

impl From<Vec<&str>> for KeyAliases {
    fn from(aliases: Vec<&str>) -> Self {
        KeyAliases(aliases.into_iter().map(String::from).collect())
    }
}

impl From<&[String]> for KeyAliases {
    fn from(aliases: &[String]) -> Self {
        KeyAliases(aliases.to_vec())
    }
}

impl From<&[&str]> for KeyAliases {
    fn from(aliases: &[&str]) -> Self {
        KeyAliases(aliases.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyAliases {
    fn from(aliases: [&str; N]) -> Self {
        KeyAliases(aliases.iter().map(|s| s.to_string()).collect())
    }
}

/// Key list used when an entity is keyless
///
/// Every keyless entity shares this one allocation until it is deep-cloned.
pub(crate) fn default_keys() -> Arc<[TypedKey]> {
    static DEFAULT_KEYS: OnceLock<Arc<[TypedKey]>> = OnceLock::new();
    DEFAULT_KEYS
        .get_or_init(|| Arc::from(vec![dummy_key().clone()]))
        .clone()
}

/// Resolve the stored key list
pub(crate) fn resolve_keys(keys: Option<Keys>) -> Arc<[TypedKey]> {
    match keys {
        Some(keys) => keys.into_inner().into(),
        None => default_keys(),
    }
}

/// Resolve the stored key aliases
///
/// An explicit non-empty list wins; otherwise every key contributes its own
/// embedded alias. The explicit list is not checked against the key count.
pub(crate) fn resolve_key_alias(keys: &[TypedKey], key_alias: Option<KeyAliases>) -> Arc<[String]> {
    match key_alias {
        Some(aliases) if !aliases.is_empty() => aliases.into_inner().into(),
        _ => keys.iter().map(|k| k.key_column_alias.clone()).collect(),
    }
}

/// Resolve the feature alias, falling back to the feature name
pub(crate) fn resolve_feature_alias(name: &str, feature_alias: Option<String>) -> String {
    match feature_alias {
        Some(alias) if !alias.is_empty() => alias,
        _ => name.to_string(),
    }
}

/// Clone every key and overwrite its alias with the matching entry
pub(crate) fn realias_keys(
    keys: &[TypedKey],
    aliases: &KeyAliases,
) -> Result<(Arc<[TypedKey]>, Arc<[String]>)> {
    if aliases.len() != keys.len() {
        return Err(CoreError::KeyAliasMismatch {
            expected: keys.len(),
            actual: aliases.len(),
        });
    }

    let new_keys = keys
        .iter()
        .zip(aliases.as_slice())
        .map(|(key, alias)| key.clone().with_alias(alias.clone()))
        .collect();

    Ok((new_keys, aliases.as_slice().iter().cloned().collect()))
}
