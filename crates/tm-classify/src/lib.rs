//! Classification engine
//!
//! Partitions the distribution of a numeric feature attribute into ordered,
//! contiguous classes and exposes the breakpoints bounding them.

pub mod classifier;
pub mod engine;
pub mod method;
pub mod methods;

use thiserror::Error;

// Re-exports
pub use classifier::{breaks, ClassBreaks, ClassRange, Classifier};
pub use engine::{classify, classify_values};
pub use method::ClassificationMethod;

/// Errors that can occur while classifying features
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    #[error("Invalid classification: {0}")]
    InvalidClassification(String),
}

impl ClassificationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ClassificationError::InvalidClassification(message.into())
    }
}
