//! Explore service interface

use async_trait::async_trait;
use cex_domain::error::Result;
use cex_domain::value_objects::{ExploreParams, Principal, VectorSearchResult};
use tokio_util::sync::CancellationToken;

/// Concept Exploration Interface
///
/// Turns free-text query terms into a query vector, optionally moved toward
/// or away from other concept clusters, and returns the nearest matches with
/// their beacons set.
#[async_trait]
pub trait ExploreServiceInterface: Send + Sync {
    /// Explore concepts through unstructured search terms
    ///
    /// Returns either the complete annotated result list or an error, never
    /// a partial list. Cancelling `cancel` aborts the request at its current
    /// blocking step.
    async fn explore_concepts(
        &self,
        cancel: &CancellationToken,
        principal: Option<&Principal>,
        params: &ExploreParams,
    ) -> Result<Vec<VectorSearchResult>>;
}
