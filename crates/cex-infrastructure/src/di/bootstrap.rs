//! Application bootstrap
//!
//! ```text
//! AppConfig → registries (linkme) → Arc<dyn Port> → ExploreServiceImpl
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let results = context
//!     .explore_service()
//!     .explore_concepts(&cancel, principal.as_ref(), &params)
//!     .await?;
//! ```

use crate::config::AppConfig;
use cex_application::domain_services::explore::ExploreServiceInterface;
use cex_application::ports::registry::{
    list_authorizers, list_embedding_providers, list_vector_movers, list_vector_searchers,
    resolve_authorizer, resolve_embedding_provider, resolve_vector_mover, resolve_vector_searcher,
};
use cex_application::ports::{Authorizer, EmbeddingProvider, VectorMover, VectorSearcher};
use cex_application::use_cases::ExploreServiceImpl;
use cex_domain::error::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Application context holding the resolved providers and the explore service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    authorizer: Arc<dyn Authorizer>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_mover: Arc<dyn VectorMover>,
    vector_searcher: Arc<dyn VectorSearcher>,
    explore_service: Arc<dyn ExploreServiceInterface>,
}

impl AppContext {
    /// Explore use case
    pub fn explore_service(&self) -> Arc<dyn ExploreServiceInterface> {
        Arc::clone(&self.explore_service)
    }

    /// Resolved authorizer
    pub fn authorizer(&self) -> Arc<dyn Authorizer> {
        Arc::clone(&self.authorizer)
    }

    /// Resolved embedding provider
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding_provider)
    }

    /// Resolved vector mover
    pub fn vector_mover(&self) -> Arc<dyn VectorMover> {
        Arc::clone(&self.vector_mover)
    }

    /// Resolved vector searcher
    pub fn vector_searcher(&self) -> Arc<dyn VectorSearcher> {
        Arc::clone(&self.vector_searcher)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("authorizer", &self.authorizer.provider_name())
            .field("embedding_provider", &self.embedding_provider.provider_name())
            .field("vector_mover", &self.vector_mover.provider_name())
            .field("vector_searcher", &self.vector_searcher.provider_name())
            .finish_non_exhaustive()
    }
}

fn provider_error(port: &str, message: String) -> Error {
    Error::config(format!("{port}: {message}"))
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let authorizer = resolve_authorizer(&config.auth.to_registry_config())
        .map_err(|e| provider_error("authorizer", e))?;
    let embedding_provider =
        resolve_embedding_provider(&config.providers.embedding.to_registry_config())
            .map_err(|e| provider_error("embedding provider", e))?;
    let vector_mover = resolve_vector_mover(&config.providers.mover.to_registry_config())
        .map_err(|e| provider_error("vector mover", e))?;
    let vector_searcher =
        resolve_vector_searcher(&config.providers.vector_index.to_registry_config())
            .map_err(|e| provider_error("vector index", e))?;

    info!(
        authorizer = authorizer.provider_name(),
        embedding = embedding_provider.provider_name(),
        mover = vector_mover.provider_name(),
        index = vector_searcher.provider_name(),
        "providers resolved"
    );

    let mut service = ExploreServiceImpl::new(
        Arc::clone(&authorizer),
        Arc::clone(&embedding_provider),
        Arc::clone(&vector_mover),
        Arc::clone(&vector_searcher),
    )
    .with_beacons(config.explore.beacons());
    if let Some(timeout) = config.explore.timeout() {
        service = service.with_timeout(timeout);
    }

    Ok(AppContext {
        config: Arc::new(config),
        authorizer,
        embedding_provider,
        vector_mover,
        vector_searcher,
        explore_service: Arc::new(service),
    })
}

/// Registered providers of one port
#[derive(Debug, Clone)]
pub struct ProviderListing {
    /// Port name
    pub port: &'static str,
    /// `(name, description)` of every registered implementation
    pub providers: Vec<(&'static str, &'static str)>,
}

/// Every registered provider, grouped by port
pub fn available_providers() -> Vec<ProviderListing> {
    vec![
        ProviderListing {
            port: "embedding",
            providers: list_embedding_providers(),
        },
        ProviderListing {
            port: "vector_index",
            providers: list_vector_searchers(),
        },
        ProviderListing {
            port: "mover",
            providers: list_vector_movers(),
        },
        ProviderListing {
            port: "authorizer",
            providers: list_authorizers(),
        },
    ]
}
