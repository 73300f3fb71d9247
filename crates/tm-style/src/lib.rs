//! Graduated color style assembly
//!
//! Turns a classified numeric attribute into an ordered set of rules, one per
//! class, each pairing a closed value range with a geometry-appropriate symbol.

pub mod appearance;
pub mod builder;
pub mod config;
pub mod rule;
pub mod style;
pub mod symbol;

use thiserror::Error;
use tm_classify::ClassificationError;
use tm_palette::PaletteError;

// Re-exports
pub use appearance::AppearanceConfig;
pub use builder::{clamp_class_count, GraduatedColorStyleBuilder, MAX_CLASSES, MIN_CLASSES};
pub use config::StyleConfig;
pub use rule::{format_range_label, RangePredicate, Rule};
pub use style::Style;
pub use symbol::{Fill, LineSymbol, Mark, MarkShape, PointSymbol, PolygonSymbol, Stroke, Symbol};

/// Errors that can occur while creating styles
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Palette(#[from] PaletteError),
}
