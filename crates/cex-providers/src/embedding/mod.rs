//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for concept exploration.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | OllamaEmbeddingProvider | Local | Complete (`embedding-ollama` feature) |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingProvider`, deterministic and offline
//! - **Local/Privacy-First**: `OllamaEmbeddingProvider` against a local Ollama server

pub mod null;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;

pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
