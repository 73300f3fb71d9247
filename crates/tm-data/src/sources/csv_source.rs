use std::fs::File;
use std::io::BufReader;

use async_trait::async_trait;
use csv::ReaderBuilder;
use tm_core::{AttributeKind, Feature, FeatureCollection, FeatureSchema, GeometryBinding, GeometryDescriptor};
use tracing::{debug, warn};

use crate::config::SourceConfig;
use crate::schema::SchemaDetector;
use crate::{DataError, FeatureSource};

/// Point features read from a CSV table with longitude/latitude columns
pub struct CsvSource {
    config: SourceConfig,
    /// Schema detected from sampled rows
    schema: FeatureSchema,
    name: String,
}

impl CsvSource {
    /// Open a CSV file and detect its attribute schema
    pub async fn open(config: SourceConfig) -> Result<Self, DataError> {
        let schema = Self::analyze_file(&config).await?;
        let name = config
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
            .to_string();

        debug!(source = %name, attributes = schema.attributes.len(), "opened CSV source");

        Ok(Self { config, schema, name })
    }

    /// Sample the file to detect column kinds
    async fn analyze_file(config: &SourceConfig) -> Result<FeatureSchema, DataError> {
        tokio::task::spawn_blocking({
            let config = config.clone();
            move || -> Result<FeatureSchema, DataError> {
                let file = File::open(&config.path)?;
                let mut csv_reader = ReaderBuilder::new()
                    .has_headers(true)
                    .from_reader(BufReader::new(file));

                let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();
                for column in [&config.lon_column, &config.lat_column] {
                    if !headers.contains(column) {
                        return Err(DataError::MissingColumn(column.clone()));
                    }
                }

                let mut sample_rows = Vec::new();
                for result in csv_reader.records().take(config.sample_size) {
                    let record = result?;
                    sample_rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
                }

                let detector = SchemaDetector::new()
                    .with_sample_size(config.sample_size)
                    .with_null_config(config.null_config.clone());

                let mut attributes = detector.detect_from_samples(&headers, &sample_rows);
                for attribute in &mut attributes {
                    if let Some(kind) = config.column_types.get(&attribute.name) {
                        attribute.kind = *kind;
                    }
                }

                let name = config
                    .path
                    .file_stem()
                    .and_then(|n| n.to_str())
                    .unwrap_or("csv")
                    .to_string();

                Ok(FeatureSchema {
                    name,
                    geometry: GeometryDescriptor::new("location", GeometryBinding::Point),
                    attributes,
                })
            }
        })
        .await?
    }

    fn read_features(config: &SourceConfig, schema: &FeatureSchema) -> Result<Vec<Feature>, DataError> {
        let file = File::open(&config.path)?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataError::MissingColumn(column.to_string()))
        };
        let lon_idx = position(&config.lon_column)?;
        let lat_idx = position(&config.lat_column)?;

        let kinds: Vec<AttributeKind> = headers
            .iter()
            .map(|h| schema.attribute(h).map(|a| a.kind).unwrap_or(AttributeKind::Text))
            .collect();

        let null_config = &config.null_config;
        let mut features = Vec::new();
        let mut skipped = 0usize;

        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;

            let coordinate = |idx: usize| {
                record
                    .get(idx)
                    .and_then(|raw| null_config.parse_cell(raw, AttributeKind::Real).as_f64())
            };
            if coordinate(lon_idx).is_none() || coordinate(lat_idx).is_none() {
                skipped += 1;
                continue;
            }

            let mut feature = Feature::new().with_id(row.to_string());
            for ((header, kind), raw) in headers.iter().zip(&kinds).zip(record.iter()) {
                feature = feature.with(header.as_str(), null_config.parse_cell(raw, *kind));
            }
            features.push(feature);
        }

        if skipped > 0 {
            warn!(skipped, "skipped CSV rows without valid coordinates");
        }

        Ok(features)
    }
}

#[async_trait]
impl FeatureSource for CsvSource {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    async fn features(&self) -> Result<FeatureCollection, DataError> {
        let config = self.config.clone();
        let schema = self.schema.clone();

        tokio::task::spawn_blocking(move || -> Result<FeatureCollection, DataError> {
            let features = Self::read_features(&config, &schema)?;
            Ok(FeatureCollection::with_features(schema, features))
        })
        .await?
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tm_core::AttributeValue;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_points() {
        let file = write_csv("name,lon,lat,pop\nA,127.0,37.5,1200\nB,126.9,37.4,N/A\nC,,37.3,50\n");
        let source = CsvSource::open(SourceConfig::new(file.path())).await.unwrap();

        assert_eq!(source.schema().geometry.binding, GeometryBinding::Point);
        assert_eq!(source.schema().attribute("pop").unwrap().kind, AttributeKind::Integer);
        assert_eq!(source.schema().attribute("name").unwrap().kind, AttributeKind::Text);

        let features = source.features().await.unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features.features()[0].get("pop"), &AttributeValue::Integer(1200));
        assert!(features.features()[1].get("pop").is_null());
    }

    #[tokio::test]
    async fn test_custom_coordinates_and_overrides() {
        let file = write_csv("x,y,code\n1,2,10\n3,4,20\n");
        let config = SourceConfig::new(file.path())
            .with_coordinates("x", "y")
            .with_column_type("code", AttributeKind::Text);

        let source = CsvSource::open(config).await.unwrap();
        assert_eq!(source.schema().attribute("code").unwrap().kind, AttributeKind::Text);
        assert_eq!(source.features().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_coordinate_column() {
        let file = write_csv("name,pop\nA,1\n");
        let err = CsvSource::open(SourceConfig::new(file.path())).await.err().unwrap();
        assert!(matches!(err, DataError::MissingColumn(column) if column == "lon"));
    }
}
