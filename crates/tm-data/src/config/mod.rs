//! Source configuration

pub mod null_handling;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tm_core::AttributeKind;

pub use null_handling::NullConfig;

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    GeoJson,
    Csv,
}

impl FileType {
    /// Guess the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "geojson" | "json" => Some(FileType::GeoJson),
            "csv" | "txt" => Some(FileType::Csv),
            _ => None,
        }
    }
}

/// How to read one input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the file
    pub path: PathBuf,

    /// File type, guessed from the extension when absent
    pub file_type: Option<FileType>,

    /// Longitude column for CSV point tables
    pub lon_column: String,

    /// Latitude column for CSV point tables
    pub lat_column: String,

    /// Column type overrides for CSV tables
    pub column_types: HashMap<String, AttributeKind>,

    /// Null handling configuration
    pub null_config: NullConfig,

    /// Sample size for type inference
    pub sample_size: usize,
}

impl SourceConfig {
    /// Create a new source configuration
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_type: None,
            lon_column: "lon".to_string(),
            lat_column: "lat".to_string(),
            column_types: HashMap::new(),
            null_config: NullConfig::default(),
            sample_size: 1000,
        }
    }

    /// Set the coordinate columns for CSV input
    pub fn with_coordinates(mut self, lon: impl Into<String>, lat: impl Into<String>) -> Self {
        self.lon_column = lon.into();
        self.lat_column = lat.into();
        self
    }

    /// Force a column's type instead of detecting it
    pub fn with_column_type(mut self, column: impl Into<String>, kind: AttributeKind) -> Self {
        self.column_types.insert(column.into(), kind);
        self
    }

    /// Resolved file type
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type.or_else(|| FileType::from_path(&self.path))
    }
}
