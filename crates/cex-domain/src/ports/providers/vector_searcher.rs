use crate::error::Result;
use crate::value_objects::VectorSearchResult;
use async_trait::async_trait;

/// Vector Search Interface
///
/// Nearest-neighbour lookup over a vector index. Results come back in the
/// searcher's own order (typically descending similarity) with an empty
/// beacon.
///
/// # Example
///
/// ```ignore
/// use cex_domain::ports::providers::VectorSearcher;
///
/// let hits = searcher.vector_search("concepts", &query, 10).await?;
/// for hit in hits {
///     println!("{} {} ({})", hit.kind, hit.id, hit.score);
/// }
/// ```
#[async_trait]
pub trait VectorSearcher: Send + Sync {
    /// Search `category` for the records nearest to `vector`
    ///
    /// # Arguments
    /// * `category` - Result-set category (e.g. "concepts")
    /// * `vector` - Query vector
    /// * `limit` - Maximum number of results; the meaning of 0 is up to the searcher
    async fn vector_search(
        &self,
        category: &str,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<VectorSearchResult>>;

    /// Identifier of the implementation (e.g. "in_memory")
    fn provider_name(&self) -> &str;
}
