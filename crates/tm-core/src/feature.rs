//! Feature collections as seen by the styling layer
//!
//! Only the schema and attribute values are carried here. Coordinates stay
//! with whatever source loaded the features; styling never reads them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{GeometryBinding, GeometryDescriptor};

static NULL_VALUE: AttributeValue = AttributeValue::Null;

/// Declared type of an attribute column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Integer,
    Real,
    Boolean,
    Text,
}

impl AttributeKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, AttributeKind::Integer | AttributeKind::Real)
    }
}

/// A single attribute cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
}

impl AttributeValue {
    /// Numeric view of the value; `None` for nulls and non-numeric cells
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Integer(v) => Some(*v as f64),
            AttributeValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Real(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub name: String,
    pub kind: AttributeKind,
}

/// Schema shared by every feature in a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub name: String,
    pub geometry: GeometryDescriptor,
    pub attributes: Vec<AttributeDescriptor>,
}

impl FeatureSchema {
    /// Create a schema with a geometry column named `geom`
    pub fn new(name: impl Into<String>, binding: GeometryBinding) -> Self {
        Self {
            name: name.into(),
            geometry: GeometryDescriptor::new("geom", binding),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute column
    pub fn with_attribute(mut self, name: impl Into<String>, kind: AttributeKind) -> Self {
        self.attributes.push(AttributeDescriptor {
            name: name.into(),
            kind,
        });
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// One record of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: Option<String>,
    pub attributes: HashMap<String, AttributeValue>,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Attribute value, treating absent attributes as null
    pub fn get(&self, name: &str) -> &AttributeValue {
        self.attributes.get(name).unwrap_or(&NULL_VALUE)
    }
}

/// Features sharing one schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    schema: FeatureSchema,
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(schema: FeatureSchema) -> Self {
        Self {
            schema,
            features: Vec::new(),
        }
    }

    pub fn with_features(schema: FeatureSchema, features: Vec<Feature>) -> Self {
        Self { schema, features }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
