use std::path::Path;

use async_trait::async_trait;
use geojson::{feature::Id, GeoJson};
use serde_json::Value as JsonValue;
use tm_core::{
    AttributeDescriptor, AttributeKind, AttributeValue, Feature, FeatureCollection, FeatureSchema,
    GeometryBinding, GeometryDescriptor,
};
use tracing::debug;

use crate::{DataError, FeatureSource};

/// Features read from a GeoJSON `FeatureCollection` document
pub struct GeoJsonSource {
    collection: FeatureCollection,
    name: String,
}

impl GeoJsonSource {
    /// Read and parse a GeoJSON file
    pub async fn open(path: &Path) -> Result<Self, DataError> {
        let text = tokio::fs::read_to_string(path).await?;
        let name = path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("geojson")
            .to_string();

        let collection = tokio::task::spawn_blocking({
            let name = name.clone();
            move || Self::parse(&name, &text)
        })
        .await??;

        debug!(source = %name, features = collection.len(), "opened GeoJSON source");

        Ok(Self { collection, name })
    }

    /// Parse a GeoJSON document into a feature collection.
    ///
    /// A single `Feature` is accepted as a one-feature collection.
    pub fn parse(name: &str, text: &str) -> Result<FeatureCollection, DataError> {
        let features = match text.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::Geometry(_) => {
                return Err(DataError::GeoJson("expected a Feature or FeatureCollection".to_string()))
            }
        };

        let mut binding: Option<GeometryBinding> = None;
        let mut attributes: Vec<AttributeDescriptor> = Vec::new();
        let mut records = Vec::with_capacity(features.len());

        for feature in features {
            if let Some(geometry) = &feature.geometry {
                let found = geometry_binding(&geometry.value);
                binding = Some(match binding {
                    None => found,
                    Some(current) => merge_bindings(current, found)?,
                });
            }

            let mut record = Feature::new();
            record.id = feature.id.map(|id| match id {
                Id::String(s) => s,
                Id::Number(n) => n.to_string(),
            });

            for (key, value) in feature.properties.into_iter().flatten() {
                let value = attribute_value(value);
                if let Some(kind) = value_kind(&value) {
                    match attributes.iter_mut().find(|a| a.name == key) {
                        Some(attribute) => attribute.kind = merge_kinds(attribute.kind, kind),
                        None => attributes.push(AttributeDescriptor { name: key.clone(), kind }),
                    }
                }
                record.attributes.insert(key, value);
            }

            records.push(record);
        }

        let schema = FeatureSchema {
            name: name.to_string(),
            geometry: GeometryDescriptor::new("geometry", binding.unwrap_or(GeometryBinding::Geometry)),
            attributes,
        };

        Ok(FeatureCollection::with_features(schema, records))
    }
}

#[async_trait]
impl FeatureSource for GeoJsonSource {
    fn schema(&self) -> &FeatureSchema {
        self.collection.schema()
    }

    async fn features(&self) -> Result<FeatureCollection, DataError> {
        Ok(self.collection.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

fn geometry_binding(value: &geojson::Value) -> GeometryBinding {
    match value {
        geojson::Value::Point(_) => GeometryBinding::Point,
        geojson::Value::MultiPoint(_) => GeometryBinding::MultiPoint,
        geojson::Value::LineString(_) => GeometryBinding::LineString,
        geojson::Value::MultiLineString(_) => GeometryBinding::MultiLineString,
        geojson::Value::Polygon(_) => GeometryBinding::Polygon,
        geojson::Value::MultiPolygon(_) => GeometryBinding::MultiPolygon,
        geojson::Value::GeometryCollection(_) => GeometryBinding::GeometryCollection,
    }
}

/// Single and multi variants of one shape merge to the multi variant;
/// different shapes cannot share a schema.
fn merge_bindings(current: GeometryBinding, found: GeometryBinding) -> Result<GeometryBinding, DataError> {
    if current == found {
        return Ok(current);
    }

    match (current.shape_type(), found.shape_type()) {
        (Some(a), Some(b)) if a == b => Ok(match a {
            tm_core::ShapeType::Point => GeometryBinding::MultiPoint,
            tm_core::ShapeType::Line => GeometryBinding::MultiLineString,
            tm_core::ShapeType::Polygon => GeometryBinding::MultiPolygon,
        }),
        _ => Err(DataError::SchemaDetection(format!(
            "mixed geometry types {:?} and {:?}",
            current, found
        ))),
    }
}

fn attribute_value(value: JsonValue) -> AttributeValue {
    match value {
        JsonValue::Null => AttributeValue::Null,
        JsonValue::Bool(b) => AttributeValue::Boolean(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => AttributeValue::Integer(i),
            None => n.as_f64().map(AttributeValue::Real).unwrap_or(AttributeValue::Null),
        },
        JsonValue::String(s) => AttributeValue::Text(s),
        other => AttributeValue::Text(other.to_string()),
    }
}

fn value_kind(value: &AttributeValue) -> Option<AttributeKind> {
    match value {
        AttributeValue::Null => None,
        AttributeValue::Integer(_) => Some(AttributeKind::Integer),
        AttributeValue::Real(_) => Some(AttributeKind::Real),
        AttributeValue::Boolean(_) => Some(AttributeKind::Boolean),
        AttributeValue::Text(_) => Some(AttributeKind::Text),
    }
}

fn merge_kinds(current: AttributeKind, found: AttributeKind) -> AttributeKind {
    match (current, found) {
        (a, b) if a == b => a,
        (AttributeKind::Integer, AttributeKind::Real) | (AttributeKind::Real, AttributeKind::Integer) => {
            AttributeKind::Real
        }
        _ => AttributeKind::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COUNTIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": 1,
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] },
                "properties": { "name": "North", "pop": 1200, "area": 2.5 }
            },
            {
                "type": "Feature",
                "id": "s",
                "geometry": { "type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]]] },
                "properties": { "name": "South", "pop": 300.5, "area": null }
            }
        ]
    }"#;

    #[test]
    fn test_parse_collection() {
        let collection = GeoJsonSource::parse("counties", COUNTIES).unwrap();
        let schema = collection.schema();

        assert_eq!(collection.len(), 2);
        assert_eq!(schema.geometry.binding, GeometryBinding::MultiPolygon);
        assert_eq!(schema.attribute("pop").unwrap().kind, AttributeKind::Real);
        assert_eq!(schema.attribute("area").unwrap().kind, AttributeKind::Real);
        assert_eq!(schema.attribute("name").unwrap().kind, AttributeKind::Text);

        let first = &collection.features()[0];
        assert_eq!(first.id.as_deref(), Some("1"));
        assert_eq!(first.get("pop"), &AttributeValue::Integer(1200));
        assert!(collection.features()[1].get("area").is_null());
    }

    #[test]
    fn test_mixed_shapes_rejected() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [0,0] }, "properties": {} },
                { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[0,0],[1,1]] }, "properties": {} }
            ]
        }"#;
        assert!(matches!(GeoJsonSource::parse("mixed", text), Err(DataError::SchemaDetection(_))));
    }

    #[test]
    fn test_bare_geometry_rejected() {
        let text = r#"{ "type": "Point", "coordinates": [0, 0] }"#;
        assert!(matches!(GeoJsonSource::parse("p", text), Err(DataError::GeoJson(_))));
    }

    #[tokio::test]
    async fn test_open_file() {
        let mut file = tempfile::Builder::new().suffix(".geojson").tempfile().unwrap();
        file.write_all(COUNTIES.as_bytes()).unwrap();

        let source = GeoJsonSource::open(file.path()).await.unwrap();
        assert_eq!(source.schema().attributes.len(), 3);
        assert_eq!(source.features().await.unwrap().len(), 2);
    }
}
