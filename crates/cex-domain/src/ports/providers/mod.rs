//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Turns a corpus of terms into one vector |
//! | VectorMover | Shifts a vector toward or away from another |
//! | VectorSearcher | Nearest-neighbour lookup in a vector index |

/// Embedding provider port
pub mod embedding;
/// Vector movement port
pub mod vector_mover;
/// Vector search port
pub mod vector_searcher;

pub use embedding::EmbeddingProvider;
pub use vector_mover::VectorMover;
pub use vector_searcher::VectorSearcher;
