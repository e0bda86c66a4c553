//! Unit tests for features and derived features
//!
//! Covers defaulting, clone independence, re-keying contracts and the
//! rendered feature config text.

use feathr_core::*;

fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn location_key() -> TypedKey {
    TypedKey::new("DOLocationID", ValueType::Int32)
        .with_full_name("nyc_taxi.location_id")
        .with_alias("location_id")
}

fn fare() -> Feature {
    Feature::builder("f_fare", FeatureType::Float)
        .key(location_key())
        .transform("fare_amount")
        .build()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_default_transform_references_feature_name() {
    let f = Feature::new("f1", FeatureType::Int32);
    assert_eq!(
        f.transform().to_feature_config(),
        RowTransformation::expression("f1").to_feature_config()
    );
}

#[test]
fn test_feature_alias_defaults_to_name() {
    let f = fare();
    assert_eq!(f.feature_alias(), f.name());

    let d = DerivedFeature::new("f_fare_x2", FeatureType::Float, &f, "f_fare * 2");
    assert_eq!(d.feature_alias(), "f_fare_x2");
}

#[test]
fn test_key_alias_defaults_to_embedded_key_alias() {
    let pickup = TypedKey::new("PULocationID", ValueType::Int32);
    let f = Feature::builder("f_trip", FeatureType::Float)
        .key(vec![location_key(), pickup])
        .build();

    assert_eq!(f.key_alias().len(), f.key().len());
    for (alias, key) in f.key_alias().iter().zip(f.key()) {
        assert_eq!(alias, &key.key_column_alias);
    }

    let d = DerivedFeature::builder("d", FeatureType::Float, &f, "f_trip")
        .key(f.key().to_vec())
        .build();
    assert_eq!(d.key_alias(), ["location_id".to_string(), "PULocationID".to_string()]);
}

// =============================================================================
// Re-keying and re-aliasing
// =============================================================================

#[test]
fn test_with_key_returns_independent_clone() {
    let f = fare();
    let before = f.key_alias().to_vec();

    let g = f.with_key(["x"]);

    assert!(!std::ptr::eq(f.key().as_ptr(), g.key().as_ptr()));
    assert_eq!(g.key_alias(), ["x".to_string()]);
    assert_eq!(g.key()[0].key_column_alias, "x");
    assert_eq!(f.key_alias(), before.as_slice());
    assert_eq!(f.key()[0].key_column_alias, "location_id");
}

#[test]
fn test_with_key_on_dummy_key_does_not_touch_sentinel() {
    let f = Feature::new("passthrough", FeatureType::String);
    let g = f.with_key("request_id");

    assert_eq!(g.key()[0].key_column_alias, "request_id");
    assert_eq!(dummy_key().key_column_alias, "NOT_NEEDED");
    assert_eq!(f.key_alias(), ["NOT_NEEDED".to_string()]);
}

#[test]
fn test_as_feature_leaves_original_unchanged() {
    let f = fare();
    let h = f.as_feature("alias2");
    assert_eq!(h.feature_alias(), "alias2");
    assert_eq!(f.feature_alias(), "f_fare");
    assert_eq!(h.name(), f.name());
}

#[test]
#[should_panic]
fn test_feature_with_key_count_mismatch_panics() {
    let _ = fare().with_key(vec!["a", "b"]);
}

#[test]
#[should_panic]
fn test_derived_with_key_count_mismatch_panics() {
    let d = DerivedFeature::new("d", FeatureType::Float, fare(), "f_fare");
    let _ = d.with_key(Vec::<String>::new());
}

#[test]
fn test_try_with_key_reports_mismatch() {
    let err = fare().try_with_key(["a", "b"]).unwrap_err();
    assert_eq!(err, CoreError::KeyAliasMismatch { expected: 1, actual: 2 });
}

#[test]
fn test_try_with_key_chains() -> anyhow::Result<()> {
    let pair = Feature::builder("pair", FeatureType::Float)
        .key(vec![location_key(), TypedKey::new("PULocationID", ValueType::Int32)])
        .build();

    let first = pair.try_with_key(["dropoff", "pickup"])?;
    let second = first.try_with_key(vec!["a".to_string(), "b".to_string()])?;

    assert_eq!(first.key_alias(), ["dropoff".to_string(), "pickup".to_string()]);
    assert_eq!(second.key_alias(), ["a".to_string(), "b".to_string()]);
    assert_eq!(second.key()[1].key_column, "PULocationID");
    Ok(())
}

#[test]
fn test_try_with_key_on_derived_input() -> anyhow::Result<()> {
    let d = DerivedFeature::builder("d", FeatureType::Float, fare(), "f_fare")
        .key(location_key())
        .build();
    let input = FeatureInput::from(&d).try_with_key("zone")?;

    assert_eq!(input.key_alias(), ["zone".to_string()]);
    assert!(matches!(input, FeatureInput::Derived(_)));
    assert_eq!(d.key_alias(), ["location_id".to_string()]);
    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_feature_config_literal() {
    let f = Feature::new("f1", FeatureType::Int32);
    let expected = format!(
        "f1: {{ def: {} {} }}",
        RowTransformation::expression("f1").to_feature_config(),
        FeatureType::Int32.to_feature_config()
    );
    assert_eq!(normalize(&f.to_feature_config()), normalize(&expected));
}

#[test]
fn test_feature_config_is_deterministic() {
    let f = fare();
    assert_eq!(f.to_feature_config(), f.to_feature_config());
    assert_eq!(f.to_feature_config(), f.deep_clone().to_feature_config());
}

#[test]
fn test_derived_config_with_aliased_input() {
    let a = Feature::builder("a", FeatureType::Float)
        .key(location_key())
        .feature_alias("a")
        .key_alias(["k1"])
        .build();
    let d = DerivedFeature::builder("d", FeatureType::Float, &a, "a + 1")
        .key(location_key())
        .key_alias(["k1"])
        .build();

    let config = normalize(&d.to_feature_config());
    assert!(config.starts_with("d: { key: [k1] inputs: {"));
    assert!(config.contains("inputs: { a: { key: [k1], feature: a } }"));
    assert_eq!(config.matches("feature:").count(), 1);
}

#[test]
fn test_derived_config_preserves_input_order() {
    let x = Feature::new("x", FeatureType::Int32);
    let y = Feature::new("y", FeatureType::Int32);
    let d = DerivedFeature::new("d", FeatureType::Int32, vec![x, y], "x + y");

    let config = d.to_feature_config();
    let x_pos = config.find("feature: x").unwrap();
    let y_pos = config.find("feature: y").unwrap();
    assert!(x_pos < y_pos);
}

#[test]
fn test_duplicate_input_aliases_are_rendered_as_is() {
    let x = Feature::new("x", FeatureType::Int32);
    let d = DerivedFeature::new("d", FeatureType::Int32, vec![x.clone(), x], "x");
    assert_eq!(d.to_feature_config().matches("feature: x").count(), 2);
}

#[test]
fn test_shared_upstream_aliased_twice() {
    let base = fare();
    let v1 = base.as_feature("v1");
    let v2 = base.as_feature("v2");

    let d1 = DerivedFeature::new("d1", FeatureType::Float, &v1, "v1 * 2");
    let d2 = DerivedFeature::new("d2", FeatureType::Float, &v2, "v2 * 3");

    let c1 = normalize(&d1.to_feature_config());
    let c2 = normalize(&d2.to_feature_config());
    assert!(c1.contains("v1: { key: [location_id], feature: f_fare }"));
    assert!(!c1.contains("v2:"));
    assert!(c2.contains("v2: { key: [location_id], feature: f_fare }"));
    assert!(!c2.contains("v1:"));
    assert_eq!(base.feature_alias(), "f_fare");
}

#[test]
fn test_rekeyed_input_shows_in_derived_config() {
    let pair_key = vec![
        TypedKey::new("user_id", ValueType::Int64),
        TypedKey::new("item_id", ValueType::Int64),
    ];
    let affinity = Feature::builder("affinity", FeatureType::Float)
        .key(pair_key.clone())
        .build();
    let viewer = affinity.with_key(["viewer", "item"]);

    let d = DerivedFeature::builder("viewer_affinity", FeatureType::Float, &viewer, "affinity")
        .key(pair_key)
        .key_alias(["viewer", "item"])
        .build();

    let config = normalize(&d.to_feature_config());
    assert!(config.contains("key: [viewer,item] inputs:"));
    assert!(config.contains("affinity: { key: [viewer,item], feature: affinity }"));
    assert_eq!(affinity.key_alias(), ["user_id".to_string(), "item_id".to_string()]);
}
