//! Unit tests for domain error types

use cex_domain::Error;
use cex_domain::value_objects::ExplorePhase;
use std::error::Error as _;
use std::time::Duration;

#[test]
fn test_denied_error_message() {
    let error = Error::denied("user 'bob'", "get", "traversal/*");
    assert!(error.is_denied());
    assert!(!error.is_cancelled());
    assert_eq!(
        error.to_string(),
        "forbidden: user 'bob' has insufficient permissions to get traversal/*"
    );
    assert_eq!(error.phase(), Some(ExplorePhase::Authorization));
}

#[test]
fn test_embedding_failed_keeps_source() {
    let error = Error::embedding_failed(
        ExplorePhase::VectorizeMoveTo,
        Error::embedding("model offline"),
    );

    assert_eq!(
        error.to_string(),
        "vectorize move to: Embedding provider error: model offline"
    );
    assert_eq!(error.phase(), Some(ExplorePhase::VectorizeMoveTo));
    match error.inner() {
        Some(Error::Embedding { message }) => assert_eq!(message, "model offline"),
        other => panic!("Expected wrapped Embedding error, got {other:?}"),
    }
    assert!(error.source().is_some());
}

#[test]
fn test_vector_combination_failed_phase() {
    let error = Error::vector_combination_failed(
        ExplorePhase::MoveAwayFrom,
        Error::movement("dimension mismatch"),
    );
    assert!(matches!(error, Error::VectorCombinationFailed { .. }));
    assert!(error.to_string().starts_with("move away from: "));
}

#[test]
fn test_search_failed_phase() {
    let error = Error::search_failed(Error::vector_db("index unavailable"));
    assert_eq!(error.phase(), Some(ExplorePhase::VectorSearch));
    assert_eq!(
        error.to_string(),
        "vector search: Vector database error: index unavailable"
    );
}

#[test]
fn test_cancellation_is_not_rewrapped() {
    let error = Error::embedding_failed(
        ExplorePhase::VectorizeKeywords,
        Error::cancelled(ExplorePhase::VectorizeKeywords),
    );
    assert!(matches!(error, Error::Cancelled { .. }));
    assert!(error.is_cancelled());

    let error = Error::search_failed(Error::cancelled(ExplorePhase::VectorSearch));
    assert!(matches!(
        error,
        Error::Cancelled {
            phase: ExplorePhase::VectorSearch
        }
    ));
}

#[test]
fn test_denial_is_not_rewrapped() {
    let error = Error::search_failed(Error::denied("anonymous", "get", "traversal/*"));
    assert!(error.is_denied());
}

#[test]
fn test_timeout_counts_as_cancellation() {
    let error = Error::TimedOut {
        after: Duration::from_millis(250),
    };
    assert!(error.is_cancelled());
    assert_eq!(error.phase(), None);
}

#[test]
fn test_constructor_helpers() {
    assert!(matches!(Error::config("x"), Error::Config { .. }));
    assert!(matches!(Error::movement("x"), Error::Movement { .. }));
    let io = Error::io_with_source("read failed", std::io::Error::other("disk"));
    assert!(matches!(io, Error::Io { source: Some(_), .. }));
    assert_eq!(io.to_string(), "I/O error: read failed");
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
