//! YAML Parser
//!
//! Provides utilities for reading fields out of raw YAML values.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Get a required string field from YAML object
    pub fn get_string(obj: &YamlValue, field: &str) -> Result<String> {
        obj.get(field)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ParseError::MissingField {
                field: field.to_string(),
            })
    }

    /// Get an optional top-level scalar field as it is written in the source
    ///
    /// Numbers keep their literal text, so `version: 0.10` reads as `0.10`
    /// rather than the normalized `0.1`.
    pub fn get_optional_scalar(source: &str, obj: &YamlValue, field: &str) -> Option<String> {
        match obj.get(field)? {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => {
                Some(Self::top_level_literal(source, field).unwrap_or_else(|| n.to_string()))
            }
            YamlValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Literal text of a `field: value` line at column 0
    fn top_level_literal(source: &str, field: &str) -> Option<String> {
        source.lines().find_map(|line| {
            let rest = line.strip_prefix(field)?.trim_start().strip_prefix(':')?;
            let value = rest.split(" #").next().unwrap_or_default().trim();
            (!value.is_empty()).then(|| value.to_string())
        })
    }

    /// Get an optional array field from YAML object
    pub fn get_optional_array<'a>(obj: &'a YamlValue, field: &str) -> Option<&'a Vec<YamlValue>> {
        obj.get(field).and_then(|v| v.as_sequence())
    }
}
