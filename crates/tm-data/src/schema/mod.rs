//! Attribute type detection for tabular input

use tm_core::{AttributeDescriptor, AttributeKind};

use crate::config::null_handling::parse_bool;
use crate::config::NullConfig;

/// Schema detector for analyzing sampled rows and determining column kinds
pub struct SchemaDetector {
    sample_size: usize,
    null_config: NullConfig,
}

impl SchemaDetector {
    /// Create a new schema detector
    pub fn new() -> Self {
        Self {
            sample_size: 1000,
            null_config: NullConfig::default(),
        }
    }

    /// Set the sample size for detection
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    pub fn with_null_config(mut self, null_config: NullConfig) -> Self {
        self.null_config = null_config;
        self
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Detect one attribute per header from sample rows
    pub fn detect_from_samples(&self, headers: &[String], samples: &[Vec<String>]) -> Vec<AttributeDescriptor> {
        headers
            .iter()
            .enumerate()
            .map(|(idx, name)| AttributeDescriptor {
                name: name.clone(),
                kind: self.detect_column_kind(samples, idx),
            })
            .collect()
    }

    /// Detect a column's kind; columns with no non-null samples are text
    fn detect_column_kind(&self, samples: &[Vec<String>], col_idx: usize) -> AttributeKind {
        let mut is_int = true;
        let mut is_float = true;
        let mut is_bool = true;
        let mut seen = 0usize;

        for row in samples.iter().take(self.sample_size) {
            let Some(value) = row.get(col_idx) else {
                continue;
            };
            if self.null_config.is_null(value) {
                continue;
            }

            let value = value.trim();
            seen += 1;

            if is_int && value.parse::<i64>().is_err() {
                is_int = false;
            }
            if is_float && value.parse::<f64>().is_err() {
                is_float = false;
            }
            if is_bool && parse_bool(value).is_none() {
                is_bool = false;
            }
        }

        if seen == 0 {
            AttributeKind::Text
        } else if is_int {
            AttributeKind::Integer
        } else if is_float {
            AttributeKind::Real
        } else if is_bool {
            AttributeKind::Boolean
        } else {
            AttributeKind::Text
        }
    }
}

impl Default for SchemaDetector {
    fn default() -> Self {
        Self::new()
    }
}
