//! Feature config rendering contract
//!
//! Every renderable piece of a feature definition produces a fragment of the
//! brace-delimited feature config text. Fragments are substituted verbatim by
//! the enclosing renderer; no escaping or quoting of names is performed.

/// Renders a value into feature config text
pub trait ToFeatureConfig {
    /// Render this value as a feature config fragment
    fn to_feature_config(&self) -> String;
}

/// Join aliases into the inner part of a `[...]` list
pub(crate) fn join_aliases(aliases: &[String]) -> String {
    aliases.join(",")
}
