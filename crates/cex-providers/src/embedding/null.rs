//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use cex_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use cex_domain::error::Result;
use cex_domain::ports::EmbeddingProvider;
use cex_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

const NULL_MODEL: &str = "null";

/// Null embedding provider for testing
///
/// Expands the SHA-256 digest of each text into a unit-length vector, so the
/// same text always maps to the same point and different texts almost never
/// collide.
///
/// # Example
///
/// ```rust
/// use cex_providers::embedding::NullEmbeddingProvider;
/// use cex_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider emitting vectors of the given size
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        NULL_MODEL
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = Vec::with_capacity(self.dimensions);
        let mut block: u32 = 0;
        while vector.len() < self.dimensions {
            let digest = Sha256::new()
                .chain_update(text.as_bytes())
                .chain_update(block.to_le_bytes())
                .finalize();
            for chunk in digest.chunks_exact(4) {
                if vector.len() == self.dimensions {
                    break;
                }
                let raw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                // map to [-1, 1]
                #[allow(clippy::cast_precision_loss)]
                let value = (raw as f32 / u32::MAX as f32) * 2.0 - 1.0;
                vector.push(value);
            }
            block += 1;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.vectorize(text), NULL_MODEL))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL);
    if dimensions == 0 {
        return Err("null embedding provider needs at least one dimension".to_string());
    }
    Ok(Arc::new(NullEmbeddingProvider::with_dimensions(dimensions)))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
