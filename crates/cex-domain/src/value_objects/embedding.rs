//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings and related
//! concepts for similarity search.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic meaning.
///
/// ## Business Rules
///
/// - `dimensions` equals `vector.len()`
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use cex_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "null");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving the dimensions from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Element-wise mean of several embeddings
    ///
    /// All inputs must share one dimensionality. The model name of the
    /// first embedding is kept.
    pub fn centroid(embeddings: &[Embedding]) -> Result<Embedding> {
        let first = embeddings
            .first()
            .ok_or_else(|| Error::embedding("cannot compute centroid of an empty corpus"))?;

        let mut sum = vec![0.0_f32; first.vector.len()];
        for embedding in embeddings {
            if embedding.vector.len() != sum.len() {
                return Err(Error::embedding(format!(
                    "corpus embeddings differ in dimensions: {} vs {}",
                    sum.len(),
                    embedding.vector.len()
                )));
            }
            for (acc, value) in sum.iter_mut().zip(&embedding.vector) {
                *acc += value;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let count = embeddings.len() as f32;
        let vector = sum.into_iter().map(|v| v / count).collect();
        Ok(Embedding::new(vector, first.model.clone()))
    }
}
