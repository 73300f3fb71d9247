//! Class rules: a value range, its symbol and its legend label

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// `lower <= property <= upper`, closed at both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePredicate {
    pub property: String,
    pub lower: f64,
    pub upper: f64,
}

impl RangePredicate {
    pub fn between(property: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            property: property.into(),
            lower,
            upper,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub label: String,
    pub predicate: RangePredicate,
    /// `None` when the target geometry has no single shape category
    pub symbol: Option<Symbol>,
}

impl Rule {
    pub fn matches(&self, value: f64) -> bool {
        self.predicate.matches(value)
    }
}

/// Legend text for a class, `"{min} - {max}"`.
///
/// Bounds use the shortest round-trip float formatting, so integral bounds
/// carry no trailing `.0` (`"0 - 10"`, `"1.5 - 2.25"`).
pub fn format_range_label(min: f64, max: f64) -> String {
    format!("{} - {}", min, max)
}
