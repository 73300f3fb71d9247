use proptest::prelude::*;
use tm_classify::{ClassificationError, ClassificationMethod};
use tm_core::{AttributeKind, Color, Feature, FeatureCollection, FeatureSchema, GeometryBinding, ShapeType};
use tm_palette::{resolve_palette, PaletteError};
use tm_style::{AppearanceConfig, GraduatedColorStyleBuilder, StyleConfig, StyleError, Symbol};

fn collection(binding: GeometryBinding, values: &[f64]) -> FeatureCollection {
    let schema = FeatureSchema::new("sample", binding)
        .with_attribute("value", AttributeKind::Real)
        .with_attribute("area", AttributeKind::Integer)
        .with_attribute("label", AttributeKind::Text);

    let features = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Feature::new()
                .with_id(i.to_string())
                .with("value", *v)
                .with("area", 1i64)
                .with("label", "f")
        })
        .collect();

    FeatureCollection::with_features(schema, features)
}

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i * i) as f64).collect()
}

#[test]
fn test_breakpoints_round_trip_into_rules() {
    let schema = FeatureSchema::new("parcels", GeometryBinding::Polygon);
    let colors = resolve_palette("Blues", 3).unwrap();

    let style = GraduatedColorStyleBuilder::new()
        .create_style_from_breaks(&schema, "value", &[0.0, 10.0, 20.0, 30.0], &colors)
        .unwrap();

    assert_eq!(style.len(), 3);
    for (k, rule) in style.rules().iter().enumerate() {
        assert_eq!(rule.predicate.lower, k as f64 * 10.0);
        assert_eq!(rule.predicate.upper, (k + 1) as f64 * 10.0);
        assert_eq!(rule.symbol.unwrap().class_color(), colors[k]);
    }
}

#[test]
fn test_mismatched_colors_yield_no_style() {
    let schema = FeatureSchema::new("parcels", GeometryBinding::Polygon);
    let colors = resolve_palette("Blues", 3).unwrap();

    let style = GraduatedColorStyleBuilder::new().create_style_from_breaks(
        &schema,
        "value",
        &[0.0, 10.0, 20.0, 30.0],
        &colors[..2],
    );
    assert!(style.is_none());
}

#[test]
fn test_point_symbols_share_appearance() {
    let features = collection(GeometryBinding::Point, &ramp(20));
    let appearance = AppearanceConfig::default().with_fill_opacity(0.5).with_marker_size(10.0);

    let style = GraduatedColorStyleBuilder::new()
        .with_appearance(appearance)
        .create_style(&features, "value", "quantile", 3, "Reds")
        .unwrap();

    assert_eq!(style.len(), 3);
    assert_eq!(style.shape_type(), Some(ShapeType::Point));

    let points: Vec<_> = style
        .rules()
        .iter()
        .map(|rule| match rule.symbol {
            Some(Symbol::Point(point)) => point,
            other => panic!("expected point symbol, got {other:?}"),
        })
        .collect();

    for point in &points {
        assert_eq!(point.size, 10.0);
        assert_eq!(point.mark.fill.opacity, 0.5);
        assert_eq!(point.mark.stroke.color, Color::WHITE);
    }

    let mut first = points[0];
    let mut second = points[1];
    assert_ne!(first.mark.fill.color, second.mark.fill.color);
    first.mark.fill.color = Color::BLACK;
    second.mark.fill.color = Color::BLACK;
    assert_eq!(first, second);
}

#[test]
fn test_line_and_polygon_symbols() {
    let appearance = AppearanceConfig::default().with_line_width(2.0).with_outline_width(1.5);
    let builder = GraduatedColorStyleBuilder::new().with_appearance(appearance);

    let lines = builder
        .create_style(&collection(GeometryBinding::MultiLineString, &ramp(10)), "value", "eq", 4, "")
        .unwrap();
    assert!(lines.rules().iter().all(|r| matches!(r.symbol, Some(Symbol::Line(l)) if l.stroke.width == 2.0)));

    let polygons = builder
        .create_style(&collection(GeometryBinding::Polygon, &ramp(10)), "value", "eq", 4, "")
        .unwrap();
    for rule in polygons.rules() {
        let Some(Symbol::Polygon(polygon)) = rule.symbol else {
            panic!("expected polygon symbol");
        };
        assert_eq!(polygon.stroke.color, Color::LIGHT_GRAY);
        assert_eq!(polygon.stroke.width, 1.5);
    }
}

#[test]
fn test_empty_palette_uses_default() {
    let features = collection(GeometryBinding::Polygon, &ramp(10));
    let builder = GraduatedColorStyleBuilder::new();

    let defaulted = builder.create_style(&features, "value", "", 5, "").unwrap();
    let named = builder.create_style(&features, "value", "", 5, "OrRd").unwrap();
    assert_eq!(defaulted, named);
}

#[test]
fn test_boundary_value_uses_lower_class() {
    let schema = FeatureSchema::new("parcels", GeometryBinding::Polygon);
    let colors = resolve_palette("Greens", 3).unwrap();
    let style = GraduatedColorStyleBuilder::new()
        .create_style_from_breaks(&schema, "value", &[0.0, 10.0, 20.0, 30.0], &colors)
        .unwrap();

    assert_eq!(style.rule_for(10.0).unwrap().label, "0 - 10");
    assert_eq!(style.rule_for(10.5).unwrap().label, "10 - 20");
    assert_eq!(style.rule_for(30.0).unwrap().label, "20 - 30");
    assert!(style.rule_for(30.5).is_none());

    let legend = style.legend();
    assert_eq!(legend.len(), 3);
    assert_eq!(legend[0], ("0 - 10", Some(colors[0])));
}

#[test]
fn test_errors_propagate() {
    let features = collection(GeometryBinding::Polygon, &ramp(10));
    let builder = GraduatedColorStyleBuilder::new();

    let err = builder.create_style(&features, "value", "jenks", 5, "Rainbow").unwrap_err();
    assert_eq!(err, StyleError::Palette(PaletteError::PaletteNotFound("Rainbow".into())));

    let err = builder.create_style(&features, "missing", "jenks", 5, "").unwrap_err();
    assert!(matches!(err, StyleError::Classification(ClassificationError::InvalidClassification(_))));

    let err = builder.create_style(&features, "label", "jenks", 5, "").unwrap_err();
    assert!(matches!(err, StyleError::Classification(_)));

    let empty = collection(GeometryBinding::Polygon, &[]);
    assert!(builder.create_style(&empty, "value", "jenks", 5, "").is_err());
}

#[test]
fn test_zero_denominator_does_not_abort() {
    let mut features = collection(GeometryBinding::Polygon, &ramp(12));
    features.push(Feature::new().with_id("zero").with("value", 5.0).with("area", 0i64));

    let style = GraduatedColorStyleBuilder::new()
        .with_normalize_by("area")
        .create_style(&features, "value", "quantile", 4, "")
        .unwrap();

    assert_eq!(style.len(), 4);
    assert_eq!(style.rules().last().unwrap().predicate.upper, 121.0);
}

#[test]
fn test_config_driven_style() {
    let features = collection(GeometryBinding::Point, &ramp(30));
    let config: StyleConfig = serde_json::from_str(
        r##"{
            "property": "value",
            "method": "Natural Breaks",
            "classes": 6,
            "palette": "Spectral",
            "appearance": { "marker_size": 4.0 }
        }"##,
    )
    .unwrap();

    let style = config.create_style(&features).unwrap();
    assert_eq!(style.len(), 6);

    let json: serde_json::Value = serde_json::from_str(&style.to_json().unwrap()).unwrap();
    assert_eq!(json["rules"].as_array().unwrap().len(), 6);
    assert_eq!(json["rules"][0]["symbol"]["type"], "point");
    assert_eq!(json["rules"][0]["symbol"]["size"], 4.0);
}

proptest! {
    #[test]
    fn prop_class_count_is_clamped(requested in 0usize..40, seed in 1usize..50) {
        let values = ramp(seed + 3);
        let max = values[values.len() - 1];
        let features = collection(GeometryBinding::Polygon, &values);
        let method = ClassificationMethod::EqualInterval.label();
        let style = GraduatedColorStyleBuilder::new()
            .create_style(&features, "value", method, requested, "YlGnBu")
            .unwrap();

        let classes = requested.clamp(3, 12);
        prop_assert_eq!(style.len(), classes);
        prop_assert!((style.rules()[0].predicate.upper - max / classes as f64).abs() < 1e-9);
        prop_assert!(style.rules().windows(2).all(|w| w[0].predicate.upper == w[1].predicate.lower));
    }
}
