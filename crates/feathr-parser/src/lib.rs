//! Feathr Parser - YAML feature definitions to the feature model
//!
//! This crate loads feature definition documents (keys, anchored features
//! and derived features) into `feathr-core` entities ready for rendering.

pub mod definition;
pub mod definition_parser;
pub mod error;
pub mod options;
pub mod yaml_parser;

// Re-export main parser types
pub use definition::DefinitionDocument;
pub use definition_parser::{DefinitionParser, FeatureDefinitions};
pub use error::{ParseError, Result};
pub use options::{ParserOptions, SUPPORTED_VERSION};
pub use yaml_parser::YamlParser;
