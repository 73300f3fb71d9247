//! Feature-level classification entry points

use tm_core::{FeatureCollection, FeatureSchema};
use tracing::debug;

use crate::classifier::Classifier;
use crate::method::ClassificationMethod;
use crate::methods::compute_breaks;
use crate::ClassificationError;

/// Classify `property` across `features` into `num_classes` classes.
///
/// With `normalize_by`, each feature contributes `property / normalize_by`
/// instead of the raw value. Features whose value is null, and features whose
/// denominator is null or zero, are left out of the distribution.
pub fn classify(
    features: &FeatureCollection,
    property: &str,
    normalize_by: Option<&str>,
    method: ClassificationMethod,
    num_classes: usize,
) -> Result<Classifier, ClassificationError> {
    if features.is_empty() {
        return Err(ClassificationError::invalid("feature collection is empty"));
    }

    let schema = features.schema();
    require_numeric(schema, property)?;
    if let Some(denominator) = normalize_by {
        require_numeric(schema, denominator)?;
    }

    let mut values = Vec::with_capacity(features.len());
    let mut skipped = 0usize;

    for feature in features.features() {
        let Some(numerator) = feature.get(property).as_f64() else {
            skipped += 1;
            continue;
        };

        let value = match normalize_by {
            Some(denominator) => match feature.get(denominator).as_f64() {
                Some(d) if d != 0.0 => numerator / d,
                _ => {
                    skipped += 1;
                    continue;
                }
            },
            None => numerator,
        };

        if value.is_finite() {
            values.push(value);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!(
            property,
            normalize_by,
            skipped,
            "excluded features without a classifiable value"
        );
    }

    classify_values(values, method, num_classes)
}

/// Classify a raw value distribution. Non-finite values are ignored.
pub fn classify_values(
    mut values: Vec<f64>,
    method: ClassificationMethod,
    num_classes: usize,
) -> Result<Classifier, ClassificationError> {
    if num_classes == 0 {
        return Err(ClassificationError::invalid("number of classes must be positive"));
    }

    values.retain(|v| v.is_finite());
    if values.is_empty() {
        return Err(ClassificationError::invalid("no classifiable values"));
    }

    values.sort_by(f64::total_cmp);
    let breaks = compute_breaks(method, &values, num_classes);

    debug!(?method, num_classes, count = values.len(), ?breaks, "classified values");

    Ok(Classifier::from_breaks(method, &breaks))
}

fn require_numeric(schema: &FeatureSchema, name: &str) -> Result<(), ClassificationError> {
    match schema.attribute(name) {
        Some(attribute) if attribute.kind.is_numeric() => Ok(()),
        Some(attribute) => Err(ClassificationError::invalid(format!(
            "property '{}' is not numeric ({:?})",
            name, attribute.kind
        ))),
        None => Err(ClassificationError::invalid(format!(
            "property '{}' not found in schema '{}'",
            name, schema.name
        ))),
    }
}
