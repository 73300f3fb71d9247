//! Classification method selection from free-text labels

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Statistical method used to derive class bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassificationMethod {
    /// Jenks natural breaks (optimal variance partition)
    #[default]
    Jenks,
    Quantile,
    EqualInterval,
    StandardDeviation,
    UniqueInterval,
}

impl ClassificationMethod {
    pub const ALL: [ClassificationMethod; 5] = [
        ClassificationMethod::Jenks,
        ClassificationMethod::Quantile,
        ClassificationMethod::EqualInterval,
        ClassificationMethod::StandardDeviation,
        ClassificationMethod::UniqueInterval,
    ];

    /// Resolve a loose method label.
    ///
    /// The label is upper-cased and tested for substrings in a fixed order:
    /// `NA`/`JENK`, `QU`, `EQ`, `ST`, `UN`. The first hit wins; anything else,
    /// including an empty label, is Jenks. Note that "EqualInterval" and
    /// "UniqueInterval" both contain `QU` and therefore resolve to quantile;
    /// [`ClassificationMethod::label`] gives labels that resolve to themselves.
    pub fn parse(label: &str) -> Self {
        let label = label.to_uppercase();

        if label.contains("NA") || label.contains("JENK") {
            ClassificationMethod::Jenks
        } else if label.contains("QU") {
            ClassificationMethod::Quantile
        } else if label.contains("EQ") {
            ClassificationMethod::EqualInterval
        } else if label.contains("ST") {
            ClassificationMethod::StandardDeviation
        } else if label.contains("UN") {
            ClassificationMethod::UniqueInterval
        } else {
            ClassificationMethod::Jenks
        }
    }

    /// Parse an optional label, defaulting to Jenks when absent
    pub fn parse_opt(label: Option<&str>) -> Self {
        label.map(Self::parse).unwrap_or_default()
    }

    /// Short label that [`ClassificationMethod::parse`] maps back to `self`
    pub fn label(&self) -> &'static str {
        match self {
            ClassificationMethod::Jenks => "Jenks",
            ClassificationMethod::Quantile => "Quantile",
            ClassificationMethod::EqualInterval => "EqInterval",
            ClassificationMethod::StandardDeviation => "StdDev",
            ClassificationMethod::UniqueInterval => "UniqInterval",
        }
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for ClassificationMethod {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl Serialize for ClassificationMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ClassificationMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}
