//! Tests for embeddings and the default corpus embedding

use async_trait::async_trait;
use cex_domain::error::{Error, Result};
use cex_domain::ports::providers::EmbeddingProvider;
use cex_domain::value_objects::Embedding;

/// Embeds each text as `[len, 1.0]`
struct LengthEmbedder;

#[async_trait]
impl EmbeddingProvider for LengthEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|t| Embedding::new(vec![t.len() as f32, 1.0], "length"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn provider_name(&self) -> &str {
        "length"
    }
}

#[test]
fn test_new_derives_dimensions() {
    let embedding = Embedding::new(vec![0.0; 7], "m");
    assert_eq!(embedding.dimensions, 7);
    assert_eq!(embedding.model, "m");
}

#[test]
fn test_centroid_is_elementwise_mean() {
    let a = Embedding::new(vec![1.0, 2.0, 3.0], "m");
    let b = Embedding::new(vec![3.0, 4.0, 5.0], "m");

    let centroid = Embedding::centroid(&[a, b]).unwrap();
    assert_eq!(centroid.vector, vec![2.0, 3.0, 4.0]);
    assert_eq!(centroid.dimensions, 3);
}

#[test]
fn test_centroid_of_nothing_fails() {
    let err = Embedding::centroid(&[]).unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
}

#[test]
fn test_centroid_rejects_mixed_dimensions() {
    let a = Embedding::new(vec![1.0, 2.0], "m");
    let b = Embedding::new(vec![1.0], "m");
    let err = Embedding::centroid(&[a, b]).unwrap_err();
    assert!(err.to_string().contains("differ in dimensions"));
}

#[tokio::test]
async fn test_default_embed_corpus_averages_batch() {
    let corpus = vec!["cat".to_string(), "horse".to_string()];
    let embedding = LengthEmbedder.embed_corpus(&corpus).await.unwrap();
    assert_eq!(embedding.vector, vec![4.0, 1.0]);
}

#[tokio::test]
async fn test_default_embed_corpus_rejects_empty_corpus() {
    let err = LengthEmbedder.embed_corpus(&[]).await.unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
}

#[tokio::test]
async fn test_default_health_check() {
    assert!(LengthEmbedder.health_check().await.is_ok());
}
