//! Geometry bindings and the shape categories styles are built for

use serde::{Deserialize, Serialize};

/// Concrete geometry binding declared by a feature schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryBinding {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    /// Untyped geometry column
    Geometry,
}

/// Shape category a symbol is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Point,
    Line,
    Polygon,
}

impl GeometryBinding {
    /// Map the binding to its shape category.
    ///
    /// Collections and untyped geometry have no single category.
    pub fn shape_type(&self) -> Option<ShapeType> {
        match self {
            GeometryBinding::Point | GeometryBinding::MultiPoint => Some(ShapeType::Point),
            GeometryBinding::LineString | GeometryBinding::MultiLineString => Some(ShapeType::Line),
            GeometryBinding::Polygon | GeometryBinding::MultiPolygon => Some(ShapeType::Polygon),
            GeometryBinding::GeometryCollection | GeometryBinding::Geometry => None,
        }
    }

    /// Parse a geometry type name as used by GeoJSON and WKT
    pub fn from_type_name(name: &str) -> Option<Self> {
        let binding = match name.to_ascii_lowercase().as_str() {
            "point" => GeometryBinding::Point,
            "multipoint" => GeometryBinding::MultiPoint,
            "linestring" => GeometryBinding::LineString,
            "multilinestring" => GeometryBinding::MultiLineString,
            "polygon" => GeometryBinding::Polygon,
            "multipolygon" => GeometryBinding::MultiPolygon,
            "geometrycollection" => GeometryBinding::GeometryCollection,
            "geometry" => GeometryBinding::Geometry,
            _ => return None,
        };
        Some(binding)
    }
}

/// The geometry column of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryDescriptor {
    pub name: String,
    pub binding: GeometryBinding,
}

impl GeometryDescriptor {
    pub fn new(name: impl Into<String>, binding: GeometryBinding) -> Self {
        Self {
            name: name.into(),
            binding,
        }
    }
}
