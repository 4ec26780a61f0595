//! Tests for the provider registries
//!
//! Uses `extern crate cex_providers` so the real providers register
//! themselves in the linkme slices.

extern crate cex_providers;

use cex_application::domain_services::explore::ExploreServiceInterface;
use cex_application::ports::registry::{
    AuthorizerConfig, EmbeddingProviderConfig, VectorMoverConfig, VectorSearcherConfig,
    list_authorizers, list_embedding_providers, list_vector_movers, list_vector_searchers,
    resolve_authorizer, resolve_embedding_provider, resolve_vector_mover, resolve_vector_searcher,
};
use cex_application::use_cases::ExploreServiceImpl;
use cex_domain::constants::CONCEPTS_CATEGORY;
use cex_domain::value_objects::{ExploreMove, ExploreParams, Kind, Principal};
use cex_providers::vector_index::{InMemoryVectorIndex, IndexedConcept};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

fn names(entries: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    entries.iter().map(|(name, _)| *name).collect()
}

#[test]
fn test_all_providers_are_registered() {
    let embedders = names(&list_embedding_providers());
    assert!(embedders.contains(&"null"));
    assert!(embedders.contains(&"ollama"));

    assert!(names(&list_vector_movers()).contains(&"linear"));
    assert!(names(&list_vector_searchers()).contains(&"in_memory"));

    let authorizers = names(&list_authorizers());
    assert!(authorizers.contains(&"allow_all"));
    assert!(authorizers.contains(&"admin_list"));
}

#[test]
fn test_resolve_by_name() {
    let embedder = resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(8))
        .expect("null embedder");
    assert_eq!(embedder.provider_name(), "null");
    assert_eq!(embedder.dimensions(), 8);

    let mover = resolve_vector_mover(&VectorMoverConfig::new("linear")).expect("linear mover");
    assert_eq!(mover.provider_name(), "linear");

    let searcher =
        resolve_vector_searcher(&VectorSearcherConfig::new("in_memory")).expect("in-memory index");
    assert_eq!(searcher.provider_name(), "in_memory");

    let authorizer = resolve_authorizer(&AuthorizerConfig::new("admin_list").with_admin_users(["root"]))
        .expect("admin list");
    assert_eq!(authorizer.provider_name(), "admin_list");
}

#[test]
fn test_unknown_names_list_alternatives() {
    let Err(message) = resolve_vector_mover(&VectorMoverConfig::new("spherical")) else {
        panic!("unknown mover must not resolve");
    };
    assert!(message.contains("Unknown vector mover 'spherical'"));
    assert!(message.contains("linear"));

    let Err(message) = resolve_authorizer(&AuthorizerConfig::new("ldap")) else {
        panic!("unknown authorizer must not resolve");
    };
    assert!(message.contains("allow_all"));
}

#[tokio::test]
async fn test_explore_with_registered_providers() {
    let service = ExploreServiceImpl::new(
        resolve_authorizer(&AuthorizerConfig::new("admin_list").with_read_only_users(["reader"]))
            .expect("authorizer"),
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null")).expect("embedder"),
        resolve_vector_mover(&VectorMoverConfig::new("linear")).expect("mover"),
        resolve_vector_searcher(&VectorSearcherConfig::new("in_memory")).expect("searcher"),
    );
    let params = ExploreParams::new(["cat"]).with_move_to(ExploreMove::new(["food"], 0.5));

    let results = service
        .explore_concepts(&CancellationToken::new(), Some(&Principal::new("reader")), &params)
        .await
        .expect("empty index still answers");
    assert!(results.is_empty());

    let err = service
        .explore_concepts(&CancellationToken::new(), None, &params)
        .await
        .expect_err("anonymous is denied");
    assert!(err.is_denied());
}

#[tokio::test]
async fn test_explore_limit_beyond_index_size() {
    let index = InMemoryVectorIndex::new();
    for (n, kind, vector) in [
        (1, Kind::Thing, [1.0, 0.0, 0.0, 0.0]),
        (2, Kind::Action, [0.0, 1.0, 0.0, 0.0]),
        (3, Kind::Thing, [0.5, 0.5, 0.5, 0.5]),
    ] {
        index.insert(
            CONCEPTS_CATEGORY,
            IndexedConcept::new(Uuid::from_u128(n), kind, "Animal", vector.to_vec()),
        );
    }
    let service = ExploreServiceImpl::new(
        resolve_authorizer(&AuthorizerConfig::new("allow_all")).expect("authorizer"),
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(4))
            .expect("embedder"),
        resolve_vector_mover(&VectorMoverConfig::new("linear")).expect("mover"),
        Arc::new(index),
    );

    for limit in [4, 1 << 40, usize::MAX] {
        let params = ExploreParams::new(["cat"]).with_limit(limit);
        let results = service
            .explore_concepts(&CancellationToken::new(), None, &params)
            .await
            .expect("limit above stored count");
        assert_eq!(results.len(), 3, "limit {limit}");
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| r.beacon.starts_with("weaviate://localhost/")));
        assert!(results.iter().any(|r| r.beacon.contains("/actions/")));
    }
}
