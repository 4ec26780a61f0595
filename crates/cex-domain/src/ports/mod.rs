//! Domain Port Interfaces
//!
//! Contracts of the collaborators the explorer depends on. Implementations
//! live in `cex-providers`; the explorer only ever holds `Arc<dyn Port>`.
//!
//! ## Organization
//!
//! - **providers/** - Embedding, vector movement and vector search
//! - **infrastructure/** - Authorization

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::Authorizer;
pub use providers::{EmbeddingProvider, VectorMover, VectorSearcher};
