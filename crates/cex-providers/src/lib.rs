//! # Concept Explorer - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `cex-domain`.
//! Every provider registers itself in the matching `cex-application`
//! registry so it can be selected by name from configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Null, Ollama |
//! | Movement | `VectorMover` | Linear |
//! | Vector Index | `VectorSearcher` | InMemory |
//! | Authorization | `Authorizer` | AllowAll, AdminList |
//!
//! ## Usage
//!
//! ```ignore
//! use cex_providers::embedding::NullEmbeddingProvider;
//! use cex_providers::mover::LinearVectorMover;
//! use cex_providers::vector_index::InMemoryVectorIndex;
//! ```

// Re-export cex-domain types commonly used with providers
pub use cex_domain::error::{Error, Result};
pub use cex_domain::ports::{Authorizer, EmbeddingProvider, VectorMover, VectorSearcher};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for offline testing and HTTP backends.
pub mod embedding;

/// Vector mover implementations
pub mod mover;

/// Vector index implementations
///
/// Implements `VectorSearcher` for nearest-neighbour backends.
pub mod vector_index;

/// Authorizer implementations
pub mod authorization;
