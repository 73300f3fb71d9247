//! Feature sources for thematic styling
//!
//! Loads feature collections from GeoJSON documents and CSV point tables.

pub mod config;
pub mod schema;
pub mod sources;

use async_trait::async_trait;
use thiserror::Error;
use tm_core::{FeatureCollection, FeatureSchema};
use tokio::task::JoinError;

// Re-exports
pub use config::{FileType, NullConfig, SourceConfig};
pub use schema::SchemaDetector;
pub use sources::{open_source, CsvSource, GeoJsonSource};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("GeoJSON parsing error: {0}")]
    GeoJson(String),

    #[error("Schema detection error: {0}")]
    SchemaDetection(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<geojson::Error> for DataError {
    fn from(error: geojson::Error) -> Self {
        DataError::GeoJson(error.to_string())
    }
}

/// A loaded or loadable feature collection
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Schema shared by every feature of this source
    fn schema(&self) -> &FeatureSchema;

    /// Read all features
    async fn features(&self) -> Result<FeatureCollection, DataError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}
