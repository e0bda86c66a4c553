//! Parser configuration

use serde::{Deserialize, Serialize};

/// Definition version understood by this parser
pub const SUPPORTED_VERSION: &str = "0.1";

/// Options controlling how definition documents are checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Reject documents whose version differs from [`SUPPORTED_VERSION`]
    pub strict_version: bool,

    /// Accept derived features that declare no inputs
    pub allow_empty_inputs: bool,
}

impl ParserOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self {
            strict_version: false,
            allow_empty_inputs: false,
        }
    }

    /// Enable or disable strict version checking
    pub fn with_strict_version(mut self, strict: bool) -> Self {
        self.strict_version = strict;
        self
    }

    /// Allow or reject derived features without inputs
    pub fn with_allow_empty_inputs(mut self, allow: bool) -> Self {
        self.allow_empty_inputs = allow;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParserOptions::default();
        assert!(!options.strict_version);
        assert!(!options.allow_empty_inputs);
    }

    #[test]
    fn test_options_from_partial_yaml() {
        let options: ParserOptions = serde_yaml::from_str("strict_version: true").unwrap();
        assert!(options.strict_version);
        assert!(!options.allow_empty_inputs);
    }
}
