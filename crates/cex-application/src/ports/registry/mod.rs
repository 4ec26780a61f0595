//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = ollama" → OllamaProvider     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in cex-providers)
//!
//! ```ignore
//! use cex_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "ollama",
//!     description: "Ollama local embedding provider",
//!     factory: ollama_factory,
//! };
//! ```
//!
//! ### Resolving a Provider (in cex-infrastructure)
//!
//! ```ignore
//! use cex_application::ports::registry::{resolve_embedding_provider, EmbeddingProviderConfig};
//!
//! let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("ollama"))?;
//! ```

pub mod authorizer;
pub mod embedding;
pub mod vector_mover;
pub mod vector_searcher;

pub use authorizer::{
    AUTHORIZERS, AuthorizerConfig, AuthorizerEntry, list_authorizers, resolve_authorizer,
};
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use vector_mover::{
    VECTOR_MOVERS, VectorMoverConfig, VectorMoverEntry, list_vector_movers, resolve_vector_mover,
};
pub use vector_searcher::{
    VECTOR_SEARCHERS, VectorSearcherConfig, VectorSearcherEntry, list_vector_searchers,
    resolve_vector_searcher,
};
