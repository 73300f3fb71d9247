pub mod csv_source;
pub mod geojson_source;

pub use csv_source::CsvSource;
pub use geojson_source::GeoJsonSource;

use crate::config::{FileType, SourceConfig};
use crate::{DataError, FeatureSource};

/// Open the source described by `config`, picking the reader by file type
pub async fn open_source(config: SourceConfig) -> Result<Box<dyn FeatureSource>, DataError> {
    match config.file_type() {
        Some(FileType::GeoJson) => Ok(Box::new(GeoJsonSource::open(&config.path).await?)),
        Some(FileType::Csv) => Ok(Box::new(CsvSource::open(config).await?)),
        None => Err(DataError::UnsupportedFormat(config.path.display().to_string())),
    }
}
