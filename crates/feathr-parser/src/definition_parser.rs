//! Definition parser
//!
//! Resolves a [`DefinitionDocument`] into feature entities. Inputs may only
//! reference entities declared earlier in the document (anchored features
//! first, then derived features in order), which keeps loaded graphs acyclic.

use crate::definition::{
    DefinitionDocument, DerivedFeatureDefinition, FeatureDefinition, InputReference, KeyDefinition,
    OneOrMany,
};
use crate::error::{ParseError, Result};
use crate::options::{ParserOptions, SUPPORTED_VERSION};
use crate::yaml_parser::YamlParser;
use feathr_core::{
    DerivedFeature, Feature, FeatureInput, FeatureLike, FeatureType, ToFeatureConfig, TypedKey,
    ValueType,
};
use std::collections::HashMap;
use std::path::Path;

/// Entities loaded from one definition document
#[derive(Debug, Clone, Default)]
pub struct FeatureDefinitions {
    /// Definition format version of the source document
    pub version: String,

    /// Anchored features in declaration order
    pub features: Vec<Feature>,

    /// Derived features in declaration order
    pub derived_features: Vec<DerivedFeature>,

    index: HashMap<String, FeatureInput>,
}

impl FeatureDefinitions {
    /// Look up an anchored or derived feature by name
    pub fn get(&self, name: &str) -> Option<&FeatureInput> {
        self.index.get(name)
    }

    /// Look up an anchored feature by name
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        match self.index.get(name)? {
            FeatureInput::Feature(f) => Some(f),
            FeatureInput::Derived(_) => None,
        }
    }

    /// Look up a derived feature by name
    pub fn derived_feature(&self, name: &str) -> Option<&DerivedFeature> {
        match self.index.get(name)? {
            FeatureInput::Derived(f) => Some(f),
            FeatureInput::Feature(_) => None,
        }
    }

    /// Total number of loaded entities
    pub fn len(&self) -> usize {
        self.features.len() + self.derived_features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render every entity, anchored features first, in declaration order
    pub fn to_feature_configs(&self) -> Vec<String> {
        self.features
            .iter()
            .map(ToFeatureConfig::to_feature_config)
            .chain(
                self.derived_features
                    .iter()
                    .map(ToFeatureConfig::to_feature_config),
            )
            .collect()
    }

    fn default_for_version() -> Self {
        Self {
            version: SUPPORTED_VERSION.to_string(),
            ..Default::default()
        }
    }

    fn register(&mut self, input: FeatureInput) -> Result<()> {
        let name = input.name().to_string();
        if self.index.contains_key(&name) {
            return Err(ParseError::DuplicateFeature(name));
        }
        self.index.insert(name, input);
        Ok(())
    }
}

/// Feature definition parser
pub struct DefinitionParser;

impl DefinitionParser {
    /// Parse a definition document with default options
    pub fn parse(yaml_str: &str) -> Result<FeatureDefinitions> {
        Self::parse_with_options(yaml_str, &ParserOptions::default())
    }

    /// Parse a definition document
    pub fn parse_with_options(yaml_str: &str, options: &ParserOptions) -> Result<FeatureDefinitions> {
        if yaml_str.trim().is_empty() {
            return Ok(FeatureDefinitions::default_for_version());
        }
        let yaml = YamlParser::parse(yaml_str)?;

        // Get version (default to "0.1" if not specified)
        let version = YamlParser::get_optional_scalar(yaml_str, &yaml, "version")
            .unwrap_or_else(|| SUPPORTED_VERSION.to_string());
        if options.strict_version && version != SUPPORTED_VERSION {
            return Err(ParseError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSION.to_string(),
            });
        }

        Self::check_names(&yaml, "features")?;
        Self::check_names(&yaml, "derived_features")?;

        let document: DefinitionDocument = if yaml.is_null() {
            DefinitionDocument::default()
        } else {
            serde_yaml::from_value(yaml)?
        };

        let mut definitions = Self::resolve(document, options)?;
        definitions.version = version;

        log::debug!(
            "Loaded {} features and {} derived features",
            definitions.features.len(),
            definitions.derived_features.len()
        );

        Ok(definitions)
    }

    /// Read and parse a definition file
    pub fn parse_file(path: impl AsRef<Path>) -> Result<FeatureDefinitions> {
        Self::parse_file_with_options(path, &ParserOptions::default())
    }

    /// Read and parse a definition file with the given options
    pub fn parse_file_with_options(
        path: impl AsRef<Path>,
        options: &ParserOptions,
    ) -> Result<FeatureDefinitions> {
        let path = path.as_ref();
        log::debug!("Reading feature definitions from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse_with_options(&content, options)
    }

    /// Resolve a deserialized document into entities
    pub fn resolve(document: DefinitionDocument, options: &ParserOptions) -> Result<FeatureDefinitions> {
        let keys = document
            .keys
            .into_iter()
            .map(|(name, def)| Self::build_key(def).map(|key| (name, key)))
            .collect::<Result<HashMap<_, _>>>()?;

        let mut definitions = FeatureDefinitions::default_for_version();

        for def in document.features {
            let feature = Self::build_feature(def, &keys)?;
            // Shallow clone: the index shares keys and transform with the list
            definitions.register(feature.clone().into())?;
            definitions.features.push(feature);
        }

        for def in document.derived_features {
            let derived = Self::build_derived_feature(def, &keys, &definitions, options)?;
            definitions.register(derived.clone().into())?;
            definitions.derived_features.push(derived);
        }

        Ok(definitions)
    }

    /// Every entry in a feature list needs a name before anything else
    fn check_names(yaml: &serde_yaml::Value, field: &str) -> Result<()> {
        if let Some(entries) = YamlParser::get_optional_array(yaml, field) {
            for (idx, entry) in entries.iter().enumerate() {
                YamlParser::get_string(entry, "name").map_err(|_| ParseError::MissingField {
                    field: format!("{}[{}].name", field, idx),
                })?;
            }
        }
        Ok(())
    }

    fn build_key(def: KeyDefinition) -> Result<TypedKey> {
        let key_column_type = match def.key_column_type {
            Some(ty) => ty.parse::<ValueType>()?,
            None => ValueType::Unspecified,
        };

        let mut key = TypedKey::new(def.key_column, key_column_type);
        if let Some(full_name) = def.full_name {
            key = key.with_full_name(full_name);
        }
        if let Some(description) = def.description {
            key = key.with_description(description);
        }
        if let Some(alias) = def.key_column_alias {
            key = key.with_alias(alias);
        }
        Ok(key)
    }

    fn resolve_keys(
        key_refs: Option<OneOrMany<String>>,
        keys: &HashMap<String, TypedKey>,
        referenced_by: &str,
    ) -> Result<Option<Vec<TypedKey>>> {
        let Some(key_refs) = key_refs else {
            return Ok(None);
        };

        key_refs
            .into_vec()
            .into_iter()
            .map(|key| {
                keys.get(&key).cloned().ok_or_else(|| ParseError::UndefinedKey {
                    key,
                    referenced_by: referenced_by.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    fn parse_feature_type(name: &str, feature_type: &str) -> Result<FeatureType> {
        feature_type
            .parse::<FeatureType>()
            .map_err(|e| ParseError::InvalidValue {
                field: format!("{}.type", name),
                message: e.to_string(),
            })
    }

    fn build_feature(def: FeatureDefinition, keys: &HashMap<String, TypedKey>) -> Result<Feature> {
        let feature_type = Self::parse_feature_type(&def.name, &def.feature_type)?;
        let key = Self::resolve_keys(def.key, keys, &def.name)?;

        let mut builder = Feature::builder(def.name, feature_type);
        if let Some(key) = key {
            builder = builder.key(key);
        }
        if let Some(transform) = def.transform {
            builder = builder.transform(transform.into_transformation()?);
        }
        if let Some(alias) = def.feature_alias {
            builder = builder.feature_alias(alias);
        }
        if let Some(key_alias) = def.key_alias {
            builder = builder.key_alias(key_alias.into_vec());
        }
        Ok(builder.build())
    }

    fn build_derived_feature(
        def: DerivedFeatureDefinition,
        keys: &HashMap<String, TypedKey>,
        definitions: &FeatureDefinitions,
        options: &ParserOptions,
    ) -> Result<DerivedFeature> {
        if def.inputs.is_empty() && !options.allow_empty_inputs {
            return Err(ParseError::InvalidValue {
                field: format!("{}.inputs", def.name),
                message: "derived feature must declare at least one input".to_string(),
            });
        }

        let feature_type = Self::parse_feature_type(&def.name, &def.feature_type)?;
        let key = Self::resolve_keys(def.key, keys, &def.name)?;
        let inputs = def
            .inputs
            .into_iter()
            .map(|input| Self::resolve_input(input, definitions, &def.name))
            .collect::<Result<Vec<_>>>()?;

        let transform = def.transform.into_transformation()?;
        let mut builder = DerivedFeature::builder(def.name, feature_type, inputs, transform);
        if let Some(key) = key {
            builder = builder.key(key);
        }
        if let Some(alias) = def.feature_alias {
            builder = builder.feature_alias(alias);
        }
        if let Some(key_alias) = def.key_alias {
            builder = builder.key_alias(key_alias.into_vec());
        }
        Ok(builder.build())
    }

    fn resolve_input(
        input: InputReference,
        definitions: &FeatureDefinitions,
        referenced_by: &str,
    ) -> Result<FeatureInput> {
        let resolved = definitions
            .get(input.feature())
            .ok_or_else(|| ParseError::UndefinedFeature {
                feature: input.feature().to_string(),
                referenced_by: referenced_by.to_string(),
            })?;

        match input {
            InputReference::Name(_) => Ok(resolved.clone()),
            InputReference::Aliased {
                alias, key_alias, ..
            } => {
                let mut resolved = resolved.clone();
                if let Some(alias) = alias {
                    resolved = resolved.as_feature(alias);
                }
                if let Some(key_alias) = key_alias {
                    resolved = resolved.try_with_key(key_alias.into_vec())?;
                }
                Ok(resolved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let definitions = DefinitionParser::parse("").unwrap();
        assert!(definitions.is_empty());
        assert_eq!(definitions.version, SUPPORTED_VERSION);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut definitions = FeatureDefinitions::default();
        definitions
            .register(Feature::new("f", FeatureType::Int32).into())
            .unwrap();
        let err = definitions
            .register(Feature::new("f", FeatureType::Int64).into())
            .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateFeature(name) if name == "f"));
    }

    #[test]
    fn test_build_key_defaults() {
        let key = DefinitionParser::build_key(KeyDefinition {
            key_column: "user_id".to_string(),
            key_column_type: None,
            full_name: None,
            description: None,
            key_column_alias: None,
        })
        .unwrap();
        assert_eq!(key.key_column_alias, "user_id");
        assert_eq!(key.key_column_type, ValueType::Unspecified);
    }

    #[test]
    fn test_build_key_bad_type() {
        let err = DefinitionParser::build_key(KeyDefinition {
            key_column: "user_id".to_string(),
            key_column_type: Some("UUID".to_string()),
            full_name: None,
            description: None,
            key_column_alias: None,
        })
        .unwrap_err();
        assert!(matches!(err, ParseError::Core(_)));
    }
}
