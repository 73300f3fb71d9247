//! Core data model for thematic styling
//!
//! This crate provides the feature, schema and color types shared by the
//! classification, palette and style crates.

pub mod color;
pub mod feature;
pub mod geometry;

// Re-export commonly used types
pub use color::{Color, ColorParseError};
pub use feature::{
    AttributeDescriptor, AttributeKind, AttributeValue, Feature, FeatureCollection, FeatureSchema,
};
pub use geometry::{GeometryBinding, GeometryDescriptor, ShapeType};
