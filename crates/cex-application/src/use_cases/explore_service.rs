//! Explore Service Use Case
//!
//! Vector-similarity exploration of concepts. Each request runs a strictly
//! linear pipeline and stops at the first failure:
//!
//! ```text
//! authorize → vectorize keywords → [move to] → [move away from] → vector search → beacons
//! ```
//!
//! Every blocking step races the caller's cancellation token.

use crate::domain_services::explore::ExploreServiceInterface;
use crate::ports::{Authorizer, EmbeddingProvider, VectorMover, VectorSearcher};
use cex_domain::constants::{CONCEPTS_CATEGORY, TRAVERSAL_RESOURCE, TRAVERSAL_VERB};
use cex_domain::error::{Error, Result};
use cex_domain::value_objects::{
    BeaconFormatter, ExploreMove, ExploreParams, ExplorePhase, Principal, VectorSearchResult,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Explore service implementation
///
/// Holds only shared, immutable references to its collaborators, so one
/// instance can serve any number of concurrent requests.
pub struct ExploreServiceImpl {
    authorizer: Arc<dyn Authorizer>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_mover: Arc<dyn VectorMover>,
    vector_searcher: Arc<dyn VectorSearcher>,
    beacons: BeaconFormatter,
    timeout: Option<Duration>,
}

impl ExploreServiceImpl {
    /// Create new explore service with injected dependencies
    pub fn new(
        authorizer: Arc<dyn Authorizer>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_mover: Arc<dyn VectorMover>,
        vector_searcher: Arc<dyn VectorSearcher>,
    ) -> Self {
        Self {
            authorizer,
            embedding_provider,
            vector_mover,
            vector_searcher,
            beacons: BeaconFormatter::default(),
            timeout: None,
        }
    }

    /// Use a custom beacon scheme/host
    #[must_use]
    pub fn with_beacons(mut self, beacons: BeaconFormatter) -> Self {
        self.beacons = beacons;
        self
    }

    /// Abort requests that take longer than `timeout`
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Beacon formatter used for annotation
    pub fn beacons(&self) -> &BeaconFormatter {
        &self.beacons
    }

    async fn explore(
        &self,
        cancel: &CancellationToken,
        principal: Option<&Principal>,
        params: &ExploreParams,
    ) -> Result<Vec<VectorSearchResult>> {
        self.authorizer
            .authorize(principal, TRAVERSAL_VERB, TRAVERSAL_RESOURCE)
            .inspect_err(|e| {
                if e.is_denied() {
                    warn!(error = %e, "explore request denied");
                } else {
                    warn!(error = %e, "authorization check failed");
                }
            })?;

        let vector = self.vector_from_params(cancel, params).await?;

        debug!(
            category = CONCEPTS_CATEGORY,
            limit = params.limit,
            dimensions = vector.len(),
            "running vector search"
        );
        let results = until_cancelled(
            cancel,
            ExplorePhase::VectorSearch,
            self.vector_searcher
                .vector_search(CONCEPTS_CATEGORY, &vector, params.limit),
        )
        .await
        .map_err(Error::search_failed)?;

        debug!(results = results.len(), "annotating search results");
        Ok(results
            .into_iter()
            .map(|mut result| {
                result.beacon = self.beacons.for_result(&result);
                result
            })
            .collect())
    }

    /// Build the query vector; each move starts from the output of the previous step
    async fn vector_from_params(
        &self,
        cancel: &CancellationToken,
        params: &ExploreParams,
    ) -> Result<Vec<f32>> {
        let mut vector = self
            .vectorize(cancel, ExplorePhase::VectorizeKeywords, &params.values)
            .await?;

        if params.move_to.is_active() {
            vector = self
                .apply_move(cancel, &vector, &params.move_to, Direction::Toward)
                .await?;
        }

        if params.move_away_from.is_active() {
            vector = self
                .apply_move(cancel, &vector, &params.move_away_from, Direction::Away)
                .await?;
        }

        Ok(vector)
    }

    async fn apply_move(
        &self,
        cancel: &CancellationToken,
        source: &[f32],
        movement: &ExploreMove,
        direction: Direction,
    ) -> Result<Vec<f32>> {
        let target = self
            .vectorize(cancel, direction.vectorize_phase(), &movement.values)
            .await?;

        debug!(phase = %direction.move_phase(), force = movement.force, "moving query vector");
        let moved = match direction {
            Direction::Toward => self.vector_mover.move_to(source, &target, movement.force),
            Direction::Away => self
                .vector_mover
                .move_away_from(source, &target, movement.force),
        };
        moved.map_err(|e| Error::vector_combination_failed(direction.move_phase(), e))
    }

    async fn vectorize(
        &self,
        cancel: &CancellationToken,
        phase: ExplorePhase,
        terms: &[String],
    ) -> Result<Vec<f32>> {
        debug!(phase = %phase, terms = terms.len(), "vectorizing corpus");
        let embedding = until_cancelled(cancel, phase, self.embedding_provider.embed_corpus(terms))
            .await
            .map_err(|e| Error::embedding_failed(phase, e))?;
        Ok(embedding.vector)
    }
}

#[async_trait::async_trait]
impl ExploreServiceInterface for ExploreServiceImpl {
    async fn explore_concepts(
        &self,
        cancel: &CancellationToken,
        principal: Option<&Principal>,
        params: &ExploreParams,
    ) -> Result<Vec<VectorSearchResult>> {
        match self.timeout {
            Some(after) => tokio::time::timeout(after, self.explore(cancel, principal, params))
                .await
                .map_err(|_| Error::TimedOut { after })?,
            None => self.explore(cancel, principal, params).await,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Toward,
    Away,
}

impl Direction {
    fn vectorize_phase(self) -> ExplorePhase {
        match self {
            Self::Toward => ExplorePhase::VectorizeMoveTo,
            Self::Away => ExplorePhase::VectorizeMoveAwayFrom,
        }
    }

    fn move_phase(self) -> ExplorePhase {
        match self {
            Self::Toward => ExplorePhase::MoveTo,
            Self::Away => ExplorePhase::MoveAwayFrom,
        }
    }
}

/// Run `future` unless `cancel` fires first
async fn until_cancelled<T, F>(cancel: &CancellationToken, phase: ExplorePhase, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(Error::cancelled(phase)),
        result = future => result,
    }
}
