//! Vector Mover Registry

use std::sync::Arc;

use crate::ports::VectorMover;

/// Configuration for vector mover creation
#[derive(Debug, Clone, Default)]
pub struct VectorMoverConfig {
    /// Mover name (e.g., "linear")
    pub provider: String,
    /// Largest force the mover accepts
    pub max_force: Option<f32>,
}

impl VectorMoverConfig {
    /// Create a new config with the given mover name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the force bound
    #[must_use]
    pub fn with_max_force(mut self, max_force: f32) -> Self {
        self.max_force = Some(max_force);
        self
    }
}

/// Registry entry for vector movers
pub struct VectorMoverEntry {
    /// Unique mover name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create mover instance
    pub factory: fn(&VectorMoverConfig) -> Result<Arc<dyn VectorMover>, String>,
}

#[linkme::distributed_slice]
pub static VECTOR_MOVERS: [VectorMoverEntry] = [..];

/// Resolve vector mover by name from registry
pub fn resolve_vector_mover(config: &VectorMoverConfig) -> Result<Arc<dyn VectorMover>, String> {
    let provider_name = &config.provider;

    for entry in VECTOR_MOVERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = VECTOR_MOVERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown vector mover '{provider_name}'. Available movers: {available:?}"
    ))
}

/// List all registered vector movers
pub fn list_vector_movers() -> Vec<(&'static str, &'static str)> {
    VECTOR_MOVERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
