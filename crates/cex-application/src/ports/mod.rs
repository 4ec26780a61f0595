//! Application ports
//!
//! Re-exports the collaborator ports from the domain and declares the
//! provider registries.

pub mod registry;

pub use cex_domain::ports::infrastructure::Authorizer;
pub use cex_domain::ports::providers::{EmbeddingProvider, VectorMover, VectorSearcher};
