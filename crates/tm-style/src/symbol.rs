//! Geometry-specific symbols

use serde::{Deserialize, Serialize};
use tm_core::{Color, ShapeType};

use crate::appearance::AppearanceConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkShape {
    Circle,
}

/// A well-known marker shape with outline and fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub shape: MarkShape,
    pub stroke: Stroke,
    pub fill: Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSymbol {
    pub mark: Mark,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSymbol {
    pub stroke: Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonSymbol {
    pub stroke: Stroke,
    pub fill: Fill,
}

/// Symbol for one class, tagged by the shape category it draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Symbol {
    Point(PointSymbol),
    Line(LineSymbol),
    Polygon(PolygonSymbol),
}

impl Symbol {
    /// Build the symbol for `shape` in the class color
    pub fn for_shape(shape: ShapeType, color: Color, appearance: &AppearanceConfig) -> Self {
        match shape {
            ShapeType::Point => Symbol::Point(point_symbol(color, appearance)),
            ShapeType::Line => Symbol::Line(line_symbol(color, appearance)),
            ShapeType::Polygon => Symbol::Polygon(polygon_symbol(color, appearance)),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Symbol::Point(_) => ShapeType::Point,
            Symbol::Line(_) => ShapeType::Line,
            Symbol::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// The color that varies per class
    pub fn class_color(&self) -> Color {
        match self {
            Symbol::Point(point) => point.mark.fill.color,
            Symbol::Line(line) => line.stroke.color,
            Symbol::Polygon(polygon) => polygon.fill.color,
        }
    }
}

/// Circle marker, white outline, filled in the class color
pub fn point_symbol(color: Color, appearance: &AppearanceConfig) -> PointSymbol {
    PointSymbol {
        mark: Mark {
            shape: MarkShape::Circle,
            stroke: Stroke {
                color: Color::WHITE,
                width: appearance.outline_width,
                opacity: appearance.outline_opacity,
            },
            fill: Fill {
                color,
                opacity: appearance.fill_opacity,
            },
        },
        size: appearance.marker_size,
    }
}

pub fn line_symbol(color: Color, appearance: &AppearanceConfig) -> LineSymbol {
    LineSymbol {
        stroke: Stroke {
            color,
            width: appearance.line_width,
            opacity: appearance.line_opacity,
        },
    }
}

/// Outline in the configured outline color, filled in the class color
pub fn polygon_symbol(color: Color, appearance: &AppearanceConfig) -> PolygonSymbol {
    PolygonSymbol {
        stroke: Stroke {
            color: appearance.outline_color,
            width: appearance.outline_width,
            opacity: appearance.outline_opacity,
        },
        fill: Fill {
            color,
            opacity: appearance.fill_opacity,
        },
    }
}
