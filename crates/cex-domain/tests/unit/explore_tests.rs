//! Tests for explore request value objects

use cex_domain::value_objects::{ExploreMove, ExploreParams, ExplorePhase, Principal};

#[test]
fn test_move_active_only_with_force_and_values() {
    assert!(ExploreMove::new(["food"], 0.5).is_active());
    assert!(!ExploreMove::new(["food"], 0.0).is_active());
    assert!(!ExploreMove::new(["food"], -1.0).is_active());
    assert!(!ExploreMove::new(Vec::<String>::new(), 5.0).is_active());
    assert!(!ExploreMove::default().is_active());
}

#[test]
fn test_params_builder() {
    let params = ExploreParams::new(["cat", "dog"])
        .with_limit(10)
        .with_move_to(ExploreMove::new(["food"], 0.5))
        .with_move_away_from(ExploreMove::new(["water"], 0.25));

    assert_eq!(params.values, vec!["cat", "dog"]);
    assert_eq!(params.limit, 10);
    assert_eq!(params.move_to.values, vec!["food"]);
    assert!((params.move_away_from.force - 0.25).abs() < f32::EPSILON);
}

#[test]
fn test_params_deserialize_with_defaults() {
    let params: ExploreParams = serde_json::from_str(r#"{"values": ["cat"]}"#).unwrap();
    assert_eq!(params.limit, 0);
    assert!(!params.move_to.is_active());
    assert!(!params.move_away_from.is_active());
}

#[test]
fn test_phase_names() {
    assert_eq!(ExplorePhase::VectorizeKeywords.to_string(), "vectorize keywords");
    assert_eq!(ExplorePhase::VectorizeMoveTo.to_string(), "vectorize move to");
    assert_eq!(
        ExplorePhase::VectorizeMoveAwayFrom.to_string(),
        "vectorize move away from"
    );
    assert_eq!(ExplorePhase::VectorSearch.to_string(), "vector search");
}

#[test]
fn test_principal_display_name() {
    let principal = Principal::new("alice").with_groups(["admins"]);
    assert_eq!(Principal::display_name(Some(&principal)), "user 'alice'");
    assert_eq!(Principal::display_name(None), "anonymous");
    assert_eq!(principal.groups, vec!["admins"]);
}
