//! Composition root tests
//!
//! Build the whole application from configuration and run explore requests
//! against a snapshot-backed in-memory index.

use std::io::Write;

use cex_domain::value_objects::{ExploreMove, ExploreParams, Kind, Principal};
use cex_infrastructure::config::{
    AppConfig, AuthConfig, ConfigBuilder, EmbeddingSettings, ExploreConfig, ProvidersConfig,
    VectorIndexSettings,
};
use cex_infrastructure::di::{available_providers, init_app};
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

fn snapshot() -> NamedTempFile {
    let records = serde_json::json!([
        { "id": Uuid::from_u128(1), "kind": "thing", "class_name": "City", "vector": [1.0, 0.0] },
        { "id": Uuid::from_u128(2), "kind": "action", "class_name": "Travel", "vector": [0.0, 1.0] },
        { "id": Uuid::from_u128(3), "kind": "thing", "class_name": "Country", "vector": [0.6, 0.8] }
    ]);
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{records}").expect("write snapshot");
    file
}

fn config_with(snapshot: &NamedTempFile, auth: AuthConfig) -> AppConfig {
    ConfigBuilder::new()
        .with_auth(auth)
        .with_providers(ProvidersConfig {
            embedding: EmbeddingSettings {
                dimensions: Some(2),
                ..EmbeddingSettings::default()
            },
            vector_index: VectorIndexSettings {
                snapshot_path: Some(snapshot.path().to_path_buf()),
                ..VectorIndexSettings::default()
            },
            ..ProvidersConfig::default()
        })
        .with_explore(ExploreConfig {
            beacon_host: "db.example".to_string(),
            timeout_ms: Some(5_000),
            ..ExploreConfig::default()
        })
        .build()
}

#[tokio::test]
async fn test_explore_end_to_end() {
    let snapshot = snapshot();
    let context = init_app(config_with(&snapshot, AuthConfig::default())).expect("init");

    assert_eq!(context.authorizer().provider_name(), "allow_all");
    assert_eq!(context.embedding_provider().provider_name(), "null");
    assert_eq!(context.embedding_provider().dimensions(), 2);
    assert_eq!(context.vector_mover().provider_name(), "linear");
    assert_eq!(context.vector_searcher().provider_name(), "in_memory");

    let params = ExploreParams::new(["paris"])
        .with_limit(2)
        .with_move_to(ExploreMove::new(["france"], 0.5))
        .with_move_away_from(ExploreMove::new(["rome"], 0.25));
    let results = context
        .explore_service()
        .explore_concepts(&CancellationToken::new(), None, &params)
        .await
        .expect("explore succeeds");

    assert_eq!(results.len(), 2);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    for result in &results {
        let expected = format!("weaviate://db.example/{}/{}", result.kind.plural(), result.id);
        assert_eq!(result.beacon, expected);
    }

    let all = context
        .explore_service()
        .explore_concepts(&CancellationToken::new(), None, &ExploreParams::new(["paris"]))
        .await
        .expect("explore succeeds");
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|r| r.kind == Kind::Action));
}

#[tokio::test]
async fn test_admin_list_is_enforced() {
    let snapshot = snapshot();
    let auth = AuthConfig {
        authorizer: "admin_list".to_string(),
        read_only_users: vec!["reader".to_string()],
        ..AuthConfig::default()
    };
    let context = init_app(config_with(&snapshot, auth)).expect("init");
    let service = context.explore_service();
    let params = ExploreParams::new(["paris"]);

    let results = service
        .explore_concepts(&CancellationToken::new(), Some(&Principal::new("reader")), &params)
        .await
        .expect("reader may explore");
    assert_eq!(results.len(), 3);

    let err = service
        .explore_concepts(&CancellationToken::new(), Some(&Principal::new("guest")), &params)
        .await
        .expect_err("guest is denied");
    assert!(err.is_denied());
}

#[test]
fn test_unknown_provider_fails_bootstrap() {
    let config = ConfigBuilder::new()
        .with_providers(ProvidersConfig {
            embedding: EmbeddingSettings {
                provider: "telepathy".to_string(),
                ..EmbeddingSettings::default()
            },
            ..ProvidersConfig::default()
        })
        .build();

    let err = init_app(config).expect_err("unknown embedder");
    assert!(err.to_string().contains("embedding provider"));
    assert!(err.to_string().contains("telepathy"));
}

#[test]
fn test_available_providers_cover_every_port() {
    let listing = available_providers();
    let ports: Vec<_> = listing.iter().map(|l| l.port).collect();
    assert_eq!(ports, vec!["embedding", "vector_index", "mover", "authorizer"]);
    assert!(listing.iter().all(|l| !l.providers.is_empty()));
}
