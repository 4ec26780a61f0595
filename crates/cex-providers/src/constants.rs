//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `cex-domain`, infrastructure defaults in `cex-infrastructure`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Ollama default server URL
pub const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

/// Ollama default embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Default HTTP request timeout in milliseconds
pub const HTTP_DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Content type for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// MOVEMENT CONSTANTS
// ============================================================================

/// Share of the force applied per move
pub const MOVE_FORCE_MULTIPLIER: f32 = 0.5;

/// Largest force accepted by default
pub const MOVE_MAX_FORCE: f32 = 1.0;

// ============================================================================
// VECTOR INDEX CONSTANTS
// ============================================================================

/// Results returned by the in-memory index when a request asks for 0
pub const IN_MEMORY_DEFAULT_LIMIT: usize = 100;
