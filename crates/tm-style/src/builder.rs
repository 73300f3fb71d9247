//! Graduated color style builder

use tm_classify::{classify, ClassificationMethod};
use tm_core::{Color, FeatureCollection, FeatureSchema};
use tm_palette::{resolve_palette, DEFAULT_PALETTE};
use tracing::{debug, warn};

use crate::appearance::AppearanceConfig;
use crate::rule::{format_range_label, RangePredicate, Rule};
use crate::style::Style;
use crate::symbol::Symbol;
use crate::StyleError;

/// Fewest classes a style is built with
pub const MIN_CLASSES: usize = 3;

/// Most classes a style is built with
pub const MAX_CLASSES: usize = 12;

/// Bring a requested class count into `MIN_CLASSES..=MAX_CLASSES`.
///
/// Raising a small count is silent; capping a large one logs a warning.
pub fn clamp_class_count(num_classes: usize) -> usize {
    if num_classes > MAX_CLASSES {
        warn!(requested = num_classes, "maximum numClasses cannot exceed {}", MAX_CLASSES);
        MAX_CLASSES
    } else {
        num_classes.max(MIN_CLASSES)
    }
}

/// Builds one rule per class of a numeric attribute, colored from a palette.
#[derive(Debug, Clone, Default)]
pub struct GraduatedColorStyleBuilder {
    appearance: AppearanceConfig,
    normalize_by: Option<String>,
}

impl GraduatedColorStyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(mut self, appearance: AppearanceConfig) -> Self {
        self.appearance = appearance;
        self
    }

    /// Classify `property / normalize_by` instead of the raw property.
    /// An empty name clears normalization.
    pub fn with_normalize_by(mut self, normalize_by: impl Into<String>) -> Self {
        let normalize_by = normalize_by.into();
        self.normalize_by = (!normalize_by.is_empty()).then_some(normalize_by);
        self
    }

    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    pub fn normalize_by(&self) -> Option<&str> {
        self.normalize_by.as_deref()
    }

    /// Classify `property` across `features` and build the style.
    ///
    /// `method` is a free-text label resolved by [`ClassificationMethod::parse`],
    /// `num_classes` is clamped with [`clamp_class_count`] and an empty
    /// `palette` selects the default palette.
    pub fn create_style(
        &self,
        features: &FeatureCollection,
        property: &str,
        method: &str,
        num_classes: usize,
        palette: &str,
    ) -> Result<Style, StyleError> {
        self.create_style_with(
            features,
            property,
            ClassificationMethod::parse(method),
            num_classes,
            palette,
        )
    }

    /// As [`create_style`](Self::create_style) with an already resolved method
    pub fn create_style_with(
        &self,
        features: &FeatureCollection,
        property: &str,
        method: ClassificationMethod,
        num_classes: usize,
        palette: &str,
    ) -> Result<Style, StyleError> {
        let num_classes = clamp_class_count(num_classes);

        let classifier = classify(features, property, self.normalize_by(), method, num_classes)?;
        let breaks = classifier.breaks();

        let palette = if palette.is_empty() { DEFAULT_PALETTE } else { palette };
        let colors = resolve_palette(palette, breaks.class_count())?;

        debug!(
            property,
            ?method,
            num_classes,
            palette,
            breaks = ?breaks.values(),
            "building graduated color style"
        );

        Ok(self.assemble(features.schema(), property, breaks.values(), &colors))
    }

    /// Build a style from precomputed breakpoints and colors.
    ///
    /// Returns `None` when `colors` does not hold exactly one color per class.
    pub fn create_style_from_breaks(
        &self,
        schema: &FeatureSchema,
        property: &str,
        class_breaks: &[f64],
        colors: &[Color],
    ) -> Option<Style> {
        if class_breaks.len().saturating_sub(1) != colors.len() || colors.is_empty() {
            debug!(
                breaks = class_breaks.len(),
                colors = colors.len(),
                "classBreaks's length does not match colors's length"
            );
            return None;
        }

        Some(self.assemble(schema, property, class_breaks, colors))
    }

    fn assemble(
        &self,
        schema: &FeatureSchema,
        property: &str,
        class_breaks: &[f64],
        colors: &[Color],
    ) -> Style {
        let geometry = &schema.geometry;
        let shape = geometry.binding.shape_type();
        if shape.is_none() {
            warn!(
                geometry = %geometry.name,
                binding = ?geometry.binding,
                "unsupported geometry type, rules will carry no symbol"
            );
        }

        let rules = class_breaks
            .windows(2)
            .zip(colors)
            .map(|(bounds, color)| {
                let (min, max) = (bounds[0], bounds[1]);
                Rule {
                    label: format_range_label(min, max),
                    predicate: RangePredicate::between(property, min, max),
                    symbol: shape.map(|shape| Symbol::for_shape(shape, *color, &self.appearance)),
                }
            })
            .collect();

        Style {
            geometry_property: geometry.name.clone(),
            binding: geometry.binding,
            rules,
        }
    }
}
