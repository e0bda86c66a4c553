//! Definition loading example
//!
//! Loads a YAML definition document and prints the feature config of every
//! entity in it.
//!
//! Run with: cargo run --example load_definitions [path/to/definitions.yaml]

use anyhow::Context;
use feathr_parser::{DefinitionParser, ParserOptions};
use tracing_subscriber::EnvFilter;

const DEFAULT_DEFINITIONS: &str = "demos/definitions/nyc_taxi.yaml";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DEFINITIONS.to_string());

    let options = ParserOptions::new().with_strict_version(true);
    let definitions = DefinitionParser::parse_file_with_options(&path, &options)
        .with_context(|| format!("failed to load definitions from {}", path))?;

    log::info!(
        "Loaded {} entities (version {}) from {}",
        definitions.len(),
        definitions.version,
        path
    );

    for config in definitions.to_feature_configs() {
        println!("{}", config);
    }

    Ok(())
}
