//! Classifier results and breakpoint extraction

use serde::{Deserialize, Serialize};

use crate::method::ClassificationMethod;

/// Closed numeric range covered by one class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassRange {
    pub min: f64,
    pub max: f64,
}

/// Ordered, contiguous classes produced by one classification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    method: ClassificationMethod,
    classes: Vec<ClassRange>,
}

impl Classifier {
    /// Build contiguous classes from `n + 1` non-decreasing breakpoints.
    ///
    /// Class `i` spans `breaks[i]..=breaks[i + 1]`, so neighbours share
    /// their boundary value.
    pub fn from_breaks(method: ClassificationMethod, breaks: &[f64]) -> Self {
        let classes = breaks
            .windows(2)
            .map(|pair| ClassRange {
                min: pair[0],
                max: pair[1],
            })
            .collect();

        Self { method, classes }
    }

    pub fn method(&self) -> ClassificationMethod {
        self.method
    }

    /// Number of classes
    pub fn size(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[ClassRange] {
        &self.classes
    }

    pub fn min(&self, slot: usize) -> Option<f64> {
        self.classes.get(slot).map(|c| c.min)
    }

    pub fn max(&self, slot: usize) -> Option<f64> {
        self.classes.get(slot).map(|c| c.max)
    }

    /// Breakpoints bounding the classes, see [`breaks`]
    pub fn breaks(&self) -> ClassBreaks {
        breaks(self)
    }
}

/// `N + 1` boundary values delimiting `N` classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassBreaks(Vec<f64>);

impl ClassBreaks {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of classes the breakpoints delimit
    pub fn class_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for ClassBreaks {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for ClassBreaks {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Extract breakpoints: every class minimum in order, then the last class
/// maximum. Repeated values from degenerate distributions are kept.
pub fn breaks(classifier: &Classifier) -> ClassBreaks {
    let mut values: Vec<f64> = classifier.classes.iter().map(|c| c.min).collect();

    if let Some(last) = classifier.classes.last() {
        values.push(last.max);
    }

    ClassBreaks(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_from_classes() {
        let classifier = Classifier::from_breaks(ClassificationMethod::Quantile, &[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(classifier.size(), 3);
        assert_eq!(classifier.min(1), Some(10.0));
        assert_eq!(classifier.max(1), Some(20.0));
        assert_eq!(classifier.max(3), None);
        assert_eq!(breaks(&classifier).values(), &[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(classifier.breaks().class_count(), 3);
    }

    #[test]
    fn test_degenerate_breaks_kept() {
        let classifier = Classifier::from_breaks(ClassificationMethod::Jenks, &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(classifier.breaks().values(), &[5.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_empty_classifier() {
        let classifier = Classifier::from_breaks(ClassificationMethod::Jenks, &[]);
        assert!(classifier.breaks().is_empty());
        assert_eq!(classifier.breaks().class_count(), 0);
    }
}
