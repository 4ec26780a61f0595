use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Interface
///
/// Transforms text into semantic embeddings. The explorer only uses
/// [`embed_corpus`](EmbeddingProvider::embed_corpus), which folds a whole
/// sequence of terms into one vector.
///
/// # Default Implementations
///
/// `embed_corpus()` delegates to `embed_batch()` and averages the result.
/// Providers only need to implement `embed_batch()` unless the backend can
/// embed a corpus natively.
///
/// # Example
///
/// ```ignore
/// use cex_domain::ports::providers::EmbeddingProvider;
///
/// let vector = provider
///     .embed_corpus(&["cat".to_string(), "dog".to_string()])
///     .await?;
/// assert_eq!(vector.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get one embedding per text
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get a single embedding representing the whole corpus
    async fn embed_corpus(&self, terms: &[String]) -> Result<Embedding> {
        if terms.is_empty() {
            return Err(Error::embedding("cannot embed an empty corpus"));
        }
        let embeddings = self.embed_batch(terms).await?;
        Embedding::centroid(&embeddings)
    }

    /// Number of dimensions in each embedding vector
    fn dimensions(&self) -> usize;

    /// Identifier of the implementation (e.g. "ollama", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed_corpus(&["health check".to_string()]).await?;
        Ok(())
    }
}
