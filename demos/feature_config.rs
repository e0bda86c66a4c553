//! Feature config example
//!
//! This example demonstrates:
//! - Defining keyed anchored features
//! - Re-aliasing one feature for use in several derived features
//! - Rendering the feature config text
//!
//! Run with: RUST_LOG=debug cargo run --example feature_config

use feathr_core::{
    Aggregation, DerivedFeature, Feature, FeatureLike, FeatureType, ToFeatureConfig, TypedKey,
    ValueType, WindowAggTransformation,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Feature Config Example ===\n");

    let location = TypedKey::new("DOLocationID", ValueType::Int32)
        .with_full_name("nyc_taxi.location_id")
        .with_description("drop-off location")
        .with_alias("location_id");

    // Anchored features
    let distance = Feature::builder("f_trip_distance", FeatureType::Float)
        .key(location.clone())
        .transform("trip_distance")
        .build();
    let fare_7d = Feature::builder("f_fare_7d", FeatureType::Float)
        .key(location.clone())
        .transform(WindowAggTransformation::new("fare_amount", Aggregation::Sum, "7d"))
        .build();
    let passengers = Feature::new("passenger_count", FeatureType::Int32);

    // The same upstream feature under two aliases
    let pickup = distance.as_feature("pickup_distance").with_key("pickup");
    let dropoff = distance.as_feature("dropoff_distance").with_key("dropoff");

    let per_fare = DerivedFeature::builder(
        "f_distance_per_fare",
        FeatureType::Double,
        vec![distance.clone(), fare_7d.clone()],
        "f_trip_distance / f_fare_7d",
    )
    .key(location.clone())
    .build();

    let round_trip = DerivedFeature::builder(
        "f_round_trip_distance",
        FeatureType::Double,
        vec![pickup, dropoff],
        "pickup_distance + dropoff_distance",
    )
    .key(location)
    .build();

    println!("1. Anchored features:\n");
    for feature in [&distance, &fare_7d, &passengers] {
        println!("{}", feature.to_feature_config());
    }

    println!("2. Derived features:\n");
    for feature in [&per_fare, &round_trip] {
        println!("{}", feature.to_feature_config());
    }

    println!(
        "'{}' is still referenced as '{}'",
        distance.name(),
        distance.feature_alias()
    );
}
