//! The finished style: ordered rules for one geometry type

use serde::{Deserialize, Serialize};
use tm_core::{Color, GeometryBinding, ShapeType};

use crate::rule::Rule;

/// Ordered rules, lowest class first.
///
/// Rules sharing a boundary value both match it; consumers must apply the
/// first matching rule, as [`Style::rule_for`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub geometry_property: String,
    pub binding: GeometryBinding,
    pub rules: Vec<Rule>,
}

impl Style {
    pub fn shape_type(&self) -> Option<ShapeType> {
        self.binding.shape_type()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose range contains `value`
    pub fn rule_for(&self, value: f64) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(value))
    }

    /// `(label, class color)` per rule, in rule order
    pub fn legend(&self) -> Vec<(&str, Option<Color>)> {
        self.rules
            .iter()
            .map(|rule| (rule.label.as_str(), rule.symbol.as_ref().map(|s| s.class_color())))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
