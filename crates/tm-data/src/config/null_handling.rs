//! Null cell handling for tabular input

use serde::{Deserialize, Serialize};
use tm_core::{AttributeKind, AttributeValue};

/// Null value configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullConfig {
    /// Patterns to treat as null
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: ["", "-", "N/A", "null", "None", "NaN"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Check if a value should be treated as null
    pub fn is_null(&self, value: &str) -> bool {
        let value = if self.trim_whitespace { value.trim() } else { value };

        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                value == pattern
            } else {
                value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Convert a raw cell into a typed attribute value.
    ///
    /// Integer columns fall back to reals for cells such as `1.5` that were
    /// outside the type-detection sample; anything unparseable becomes null.
    pub fn parse_cell(&self, raw: &str, kind: AttributeKind) -> AttributeValue {
        if self.is_null(raw) {
            return AttributeValue::Null;
        }

        let value = raw.trim();
        match kind {
            AttributeKind::Integer => value
                .parse::<i64>()
                .map(AttributeValue::Integer)
                .or_else(|_| value.parse::<f64>().map(AttributeValue::Real))
                .unwrap_or(AttributeValue::Null),
            AttributeKind::Real => value.parse::<f64>().map(AttributeValue::Real).unwrap_or(AttributeValue::Null),
            AttributeKind::Boolean => parse_bool(value).map(AttributeValue::Boolean).unwrap_or(AttributeValue::Null),
            AttributeKind::Text => AttributeValue::Text(raw.to_string()),
        }
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
