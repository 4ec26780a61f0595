//! Tests for beacon formatting

use cex_domain::value_objects::{BeaconFormatter, Kind, VectorSearchResult};
use uuid::Uuid;

#[test]
fn test_default_beacon_for_thing() {
    let id = Uuid::parse_str("8b2d1c9e-3f4a-4b5c-9d6e-7f8091a2b3c4").unwrap();
    let beacon = BeaconFormatter::default().format(Kind::Thing, &id);
    assert_eq!(
        beacon,
        "weaviate://localhost/things/8b2d1c9e-3f4a-4b5c-9d6e-7f8091a2b3c4"
    );
}

#[test]
fn test_beacon_pluralizes_action_kind() {
    let id = Uuid::new_v4();
    let beacon = BeaconFormatter::default().format(Kind::Action, &id);
    assert_eq!(beacon, format!("weaviate://localhost/actions/{id}"));
}

#[test]
fn test_custom_scheme_and_host() {
    let beacons = BeaconFormatter::new("cex", "concepts.example.org");
    let result = VectorSearchResult::new(Uuid::nil(), Kind::Thing, "Animal", 0.9);

    assert_eq!(beacons.scheme(), "cex");
    assert_eq!(beacons.host(), "concepts.example.org");
    assert_eq!(
        beacons.for_result(&result),
        "cex://concepts.example.org/things/00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn test_kind_names() {
    assert_eq!(Kind::Thing.name(), "thing");
    assert_eq!(Kind::Action.name(), "action");
    assert_eq!(Kind::Thing.plural(), "things");
    assert_eq!(Kind::Action.plural(), "actions");
    assert_eq!(Kind::Action.to_string(), "action");
}

#[test]
fn test_new_result_has_no_beacon() {
    let result = VectorSearchResult::new(Uuid::new_v4(), Kind::Action, "Eat", 0.4)
        .with_vector(vec![0.1, 0.2]);
    assert!(result.beacon.is_empty());
    assert_eq!(result.vector, vec![0.1, 0.2]);
    assert_eq!(result.class_name, "Eat");
}
