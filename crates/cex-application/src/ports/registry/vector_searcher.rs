//! Vector Searcher Registry
//!
//! Auto-registration system for vector index backends.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::VectorSearcher;

/// Configuration for vector searcher creation
///
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct VectorSearcherConfig {
    /// Provider name (e.g., "in_memory")
    pub provider: String,
    /// Snapshot file to load records from
    pub snapshot_path: Option<PathBuf>,
    /// Number of results returned when a request asks for 0
    pub default_limit: Option<usize>,
}

impl VectorSearcherConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the snapshot file
    #[must_use]
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Set the default limit
    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = Some(limit);
        self
    }
}

/// Registry entry for vector searchers
pub struct VectorSearcherEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create searcher instance
    pub factory: fn(&VectorSearcherConfig) -> Result<Arc<dyn VectorSearcher>, String>,
}

#[linkme::distributed_slice]
pub static VECTOR_SEARCHERS: [VectorSearcherEntry] = [..];

/// Resolve vector searcher by name from registry
pub fn resolve_vector_searcher(
    config: &VectorSearcherConfig,
) -> Result<Arc<dyn VectorSearcher>, String> {
    let provider_name = &config.provider;

    for entry in VECTOR_SEARCHERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = VECTOR_SEARCHERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown vector searcher '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered vector searchers
pub fn list_vector_searchers() -> Vec<(&'static str, &'static str)> {
    VECTOR_SEARCHERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
