//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, ExploreConfig, LoggingConfig, ProvidersConfig};

/// Root configuration of the concept explorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Authorization configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Provider selection
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Explore request settings
    #[serde(default)]
    pub explore: ExploreConfig,
}
