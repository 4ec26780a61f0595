//! Configuration types

pub mod app;
pub mod auth;
pub mod explore;
pub mod logging;
pub mod providers;

pub use app::AppConfig;
pub use auth::AuthConfig;
pub use explore::ExploreConfig;
pub use logging::LoggingConfig;
pub use providers::{EmbeddingSettings, MoverSettings, ProvidersConfig, VectorIndexSettings};
