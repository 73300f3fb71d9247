//! Serializable style request

use serde::{Deserialize, Serialize};
use tm_classify::ClassificationMethod;
use tm_core::FeatureCollection;
use tm_palette::DEFAULT_PALETTE;

use crate::appearance::AppearanceConfig;
use crate::builder::GraduatedColorStyleBuilder;
use crate::style::Style;
use crate::StyleError;

/// Everything needed to style a feature collection, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Numeric attribute to classify
    pub property: String,

    /// Optional attribute the property is divided by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize_by: Option<String>,

    #[serde(default)]
    pub method: ClassificationMethod,

    #[serde(default = "default_classes")]
    pub classes: usize,

    #[serde(default = "default_palette")]
    pub palette: String,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

fn default_classes() -> usize {
    5
}

fn default_palette() -> String {
    DEFAULT_PALETTE.to_string()
}

impl StyleConfig {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            normalize_by: None,
            method: ClassificationMethod::default(),
            classes: default_classes(),
            palette: default_palette(),
            appearance: AppearanceConfig::default(),
        }
    }

    /// Builder carrying this configuration's appearance and normalization
    pub fn builder(&self) -> GraduatedColorStyleBuilder {
        let builder = GraduatedColorStyleBuilder::new().with_appearance(self.appearance);
        match &self.normalize_by {
            Some(normalize_by) => builder.with_normalize_by(normalize_by.as_str()),
            None => builder,
        }
    }

    pub fn create_style(&self, features: &FeatureCollection) -> Result<Style, StyleError> {
        self.builder()
            .create_style_with(features, &self.property, self.method, self.classes, &self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json() {
        let config: StyleConfig = serde_json::from_str(r#"{"property": "pop"}"#).unwrap();
        assert_eq!(config, StyleConfig::new("pop"));
        assert_eq!(config.classes, 5);
        assert_eq!(config.palette, "OrRd");
        assert_eq!(config.method, ClassificationMethod::Jenks);
    }

    #[test]
    fn test_free_text_method() {
        let config: StyleConfig = serde_json::from_str(
            r#"{"property": "pop", "normalize_by": "area", "method": "Quantiles", "classes": 7}"#,
        )
        .unwrap();

        assert_eq!(config.method, ClassificationMethod::Quantile);
        assert_eq!(config.builder().normalize_by(), Some("area"));
        assert_eq!(config.classes, 7);
    }

    #[test]
    fn test_round_trip() {
        let mut config = StyleConfig::new("density");
        config.method = ClassificationMethod::UniqueInterval;
        config.appearance = config.appearance.with_line_width(3.0);

        let json = serde_json::to_string(&config).unwrap();
        let back: StyleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
