//! Exploration request value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Moves a search vector closer to (or further away from) other search terms
///
/// A move only has an effect when `force > 0` and `values` is non-empty.
/// Inactive moves are skipped without touching the embedder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreMove {
    /// Terms describing the reference concept cluster
    #[serde(default)]
    pub values: Vec<String>,
    /// Weight of the move
    #[serde(default)]
    pub force: f32,
}

impl ExploreMove {
    /// Create a move toward/away from the given terms
    pub fn new<I, S>(values: I, force: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            force,
        }
    }

    /// Whether this move must be applied
    pub fn is_active(&self) -> bool {
        self.force > 0.0 && !self.values.is_empty()
    }
}

/// Parameters of a vector based explore search
///
/// ## Example
///
/// ```rust
/// use cex_domain::value_objects::{ExploreMove, ExploreParams};
///
/// let params = ExploreParams::new(["cat", "dog"])
///     .with_limit(10)
///     .with_move_to(ExploreMove::new(["food"], 0.5));
/// assert!(params.move_to.is_active());
/// assert!(!params.move_away_from.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreParams {
    /// Query terms
    pub values: Vec<String>,
    /// Maximum number of results, passed to the searcher verbatim
    #[serde(default)]
    pub limit: usize,
    /// Move applied first
    #[serde(default)]
    pub move_to: ExploreMove,
    /// Move applied to the output of `move_to`
    #[serde(default)]
    pub move_away_from: ExploreMove,
}

impl ExploreParams {
    /// Create parameters for the given query terms with no moves and limit 0
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the result limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the move toward another cluster
    #[must_use]
    pub fn with_move_to(mut self, movement: ExploreMove) -> Self {
        self.move_to = movement;
        self
    }

    /// Set the move away from another cluster
    #[must_use]
    pub fn with_move_away_from(mut self, movement: ExploreMove) -> Self {
        self.move_away_from = movement;
        self
    }
}

/// Stage of the explore pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorePhase {
    /// Permission check
    Authorization,
    /// Embedding the query terms
    VectorizeKeywords,
    /// Embedding the move-to terms
    VectorizeMoveTo,
    /// Applying the move-to
    MoveTo,
    /// Embedding the move-away-from terms
    VectorizeMoveAwayFrom,
    /// Applying the move-away-from
    MoveAwayFrom,
    /// Nearest-neighbour query
    VectorSearch,
}

impl ExplorePhase {
    /// Human readable stage name used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authorization => "authorize",
            Self::VectorizeKeywords => "vectorize keywords",
            Self::VectorizeMoveTo => "vectorize move to",
            Self::MoveTo => "move to",
            Self::VectorizeMoveAwayFrom => "vectorize move away from",
            Self::MoveAwayFrom => "move away from",
            Self::VectorSearch => "vector search",
        }
    }
}

impl fmt::Display for ExplorePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
