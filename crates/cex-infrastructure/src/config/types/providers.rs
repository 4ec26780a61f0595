//! Provider selection configuration
//!
//! Each section names a registered provider and carries the options handed
//! to its factory.

use cex_application::ports::registry::{
    EmbeddingProviderConfig, VectorMoverConfig, VectorSearcherConfig,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_EMBEDDING_PROVIDER, DEFAULT_MOVER_PROVIDER, DEFAULT_VECTOR_INDEX_PROVIDER,
};

/// Provider configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    /// Vector index configuration
    #[serde(default)]
    pub vector_index: VectorIndexSettings,
    /// Vector mover configuration
    #[serde(default)]
    pub mover: MoverSettings,
}

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Provider name
    pub provider: String,
    /// Model name
    pub model: Option<String>,
    /// Base URL for API
    pub base_url: Option<String>,
    /// Embedding dimensions
    pub dimensions: Option<usize>,
    /// Request timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            dimensions: None,
            timeout_ms: None,
        }
    }
}

impl EmbeddingSettings {
    /// Registry configuration for the selected provider
    pub fn to_registry_config(&self) -> EmbeddingProviderConfig {
        let mut config = EmbeddingProviderConfig::new(&self.provider);
        config.model.clone_from(&self.model);
        config.base_url.clone_from(&self.base_url);
        config.dimensions = self.dimensions;
        config.timeout_ms = self.timeout_ms;
        config
    }
}

/// Vector index configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorIndexSettings {
    /// Provider name
    pub provider: String,
    /// JSON snapshot to load at startup
    pub snapshot_path: Option<PathBuf>,
    /// Results returned when a request asks for 0
    pub default_limit: Option<usize>,
}

impl Default for VectorIndexSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_INDEX_PROVIDER.to_string(),
            snapshot_path: None,
            default_limit: None,
        }
    }
}

impl VectorIndexSettings {
    /// Registry configuration for the selected index
    pub fn to_registry_config(&self) -> VectorSearcherConfig {
        let mut config = VectorSearcherConfig::new(&self.provider);
        config.snapshot_path.clone_from(&self.snapshot_path);
        config.default_limit = self.default_limit;
        config
    }
}

/// Vector mover configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverSettings {
    /// Mover name
    pub provider: String,
    /// Largest accepted force
    pub max_force: Option<f32>,
}

impl Default for MoverSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_MOVER_PROVIDER.to_string(),
            max_force: None,
        }
    }
}

impl MoverSettings {
    /// Registry configuration for the selected mover
    pub fn to_registry_config(&self) -> VectorMoverConfig {
        let mut config = VectorMoverConfig::new(&self.provider);
        config.max_force = self.max_force;
        config
    }
}
