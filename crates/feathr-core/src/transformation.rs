//! Row transformations
//!
//! A row transformation computes a feature value from the fields of an input
//! row (or, for derived features, from the values of input features).

use crate::config::ToFeatureConfig;
use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Transformation producing a feature value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowTransformation {
    /// Plain expression over input fields (e.g., `amount * 10`)
    Expression(ExpressionTransformation),

    /// Sliding window aggregation over an expression
    WindowAgg(WindowAggTransformation),
}

/// Expression evaluated per row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpressionTransformation {
    pub expr: String,
}

/// Window aggregation over an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowAggTransformation {
    /// Expression aggregated over the window
    pub agg_expr: String,

    /// Aggregation function
    pub agg_func: Aggregation,

    /// Window length, e.g. `7d` or `90m`
    pub window: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Maximum number of groups kept when `group_by` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Aggregation functions supported by window aggregations
///
/// Deserialized through [`FromStr`], so names are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aggregation {
    Sum,
    Count,
    Avg,
    Max,
    Min,
    Latest,
    MaxPooling,
    MinPooling,
    AvgPooling,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "SUM",
            Aggregation::Count => "COUNT",
            Aggregation::Avg => "AVG",
            Aggregation::Max => "MAX",
            Aggregation::Min => "MIN",
            Aggregation::Latest => "LATEST",
            Aggregation::MaxPooling => "MAX_POOLING",
            Aggregation::MinPooling => "MIN_POOLING",
            Aggregation::AvgPooling => "AVG_POOLING",
        }
    }
}

impl FromStr for Aggregation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUM" => Ok(Aggregation::Sum),
            "COUNT" => Ok(Aggregation::Count),
            "AVG" => Ok(Aggregation::Avg),
            "MAX" => Ok(Aggregation::Max),
            "MIN" => Ok(Aggregation::Min),
            "LATEST" => Ok(Aggregation::Latest),
            "MAX_POOLING" => Ok(Aggregation::MaxPooling),
            "MIN_POOLING" => Ok(Aggregation::MinPooling),
            "AVG_POOLING" => Ok(Aggregation::AvgPooling),
            _ => Err(CoreError::UnknownAggregation(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Aggregation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl ExpressionTransformation {
    /// Create an expression transformation
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }
}

impl WindowAggTransformation {
    /// Create a window aggregation without grouping, filter or limit
    pub fn new(agg_expr: impl Into<String>, agg_func: Aggregation, window: impl Into<String>) -> Self {
        Self {
            agg_expr: agg_expr.into(),
            agg_func,
            window: window.into(),
            group_by: None,
            filter: None,
            limit: None,
        }
    }

    /// Set the group-by expression
    pub fn with_group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    /// Set the row filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the group limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl RowTransformation {
    /// Create an expression transformation
    pub fn expression(expr: impl Into<String>) -> Self {
        RowTransformation::Expression(ExpressionTransformation::new(expr))
    }

    /// Expression that passes through the input field with the given name
    pub fn field_reference(field: impl Into<String>) -> Self {
        Self::expression(field)
    }
}

impl ToFeatureConfig for ExpressionTransformation {
    fn to_feature_config(&self) -> String {
        format!("\"{}\"", self.expr)
    }
}

impl ToFeatureConfig for WindowAggTransformation {
    fn to_feature_config(&self) -> String {
        let mut lines = vec![
            format!("\"{}\"", self.agg_expr),
            format!("window: {}", self.window),
            format!("aggregation: {}", self.agg_func.as_str()),
        ];
        if let Some(group_by) = &self.group_by {
            lines.push(format!("groupBy: {}", group_by));
        }
        if let Some(filter) = &self.filter {
            lines.push(format!("filter: \"{}\"", filter));
        }
        if let Some(limit) = self.limit {
            lines.push(format!("limit: {}", limit));
        }
        lines.join("\n    ")
    }
}

impl ToFeatureConfig for RowTransformation {
    fn to_feature_config(&self) -> String {
        match self {
            RowTransformation::Expression(expr) => expr.to_feature_config(),
            RowTransformation::WindowAgg(agg) => agg.to_feature_config(),
        }
    }
}

impl From<&str> for RowTransformation {
    fn from(expr: &str) -> Self {
        Self::expression(expr)
    }
}

impl From<String> for RowTransformation {
    fn from(expr: String) -> Self {
        Self::expression(expr)
    }
}

impl From<ExpressionTransformation> for RowTransformation {
    fn from(expr: ExpressionTransformation) -> Self {
        RowTransformation::Expression(expr)
    }
}

impl From<WindowAggTransformation> for RowTransformation {
    fn from(agg: WindowAggTransformation) -> Self {
        RowTransformation::WindowAgg(agg)
    }
}
