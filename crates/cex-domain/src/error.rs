//! Error handling types

use crate::value_objects::ExplorePhase;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the concept explorer
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Embedding provider operation error
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding provider error
        message: String,
    },

    /// Vector mover rejected its inputs
    #[error("Movement error: {message}")]
    Movement {
        /// Description of the rejected movement
        message: String,
    },

    /// Vector index operation error
    #[error("Vector database error: {message}")]
    VectorDb {
        /// Description of the vector index error
        message: String,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The principal may not perform the verb on the resource
    #[error("forbidden: {principal} has insufficient permissions to {verb} {resource}")]
    AuthorizationDenied {
        /// Display name of the principal ("anonymous" when absent)
        principal: String,
        /// Requested verb
        verb: String,
        /// Requested resource pattern
        resource: String,
    },

    /// Turning terms into a vector failed
    #[error("{phase}: {source}")]
    EmbeddingFailed {
        /// Which corpus was being embedded
        phase: ExplorePhase,
        /// The embedder's error
        #[source]
        source: Box<Error>,
    },

    /// Combining two vectors failed
    #[error("{phase}: {source}")]
    VectorCombinationFailed {
        /// Which move was being applied
        phase: ExplorePhase,
        /// The mover's error
        #[source]
        source: Box<Error>,
    },

    /// The nearest-neighbour query failed
    #[error("vector search: {source}")]
    SearchFailed {
        /// The searcher's error
        #[source]
        source: Box<Error>,
    },

    /// The caller cancelled the request while it was blocked
    #[error("{phase}: request cancelled")]
    Cancelled {
        /// Stage that was interrupted
        phase: ExplorePhase,
    },

    /// The request deadline elapsed
    #[error("request timed out after {after:?}")]
    TimedOut {
        /// Configured deadline
        after: Duration,
    },
}

// Basic error creation methods
impl Error {
    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a movement error
    pub fn movement<S: Into<String>>(message: S) -> Self {
        Self::Movement {
            message: message.into(),
        }
    }

    /// Create a vector index error
    pub fn vector_db<S: Into<String>>(message: S) -> Self {
        Self::VectorDb {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with a source error
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Explore pipeline error creation methods
impl Error {
    /// Create an authorization denial
    pub fn denied<P, V, R>(principal: P, verb: V, resource: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        Self::AuthorizationDenied {
            principal: principal.into(),
            verb: verb.into(),
            resource: resource.into(),
        }
    }

    /// Create a cancellation error for the given stage
    pub fn cancelled(phase: ExplorePhase) -> Self {
        Self::Cancelled { phase }
    }

    /// Wrap an embedder error with the stage that produced it
    ///
    /// Denials and cancellations keep their identity and are returned as-is.
    pub fn embedding_failed(phase: ExplorePhase, source: Error) -> Self {
        if source.passes_through() {
            return source;
        }
        Self::EmbeddingFailed {
            phase,
            source: Box::new(source),
        }
    }

    /// Wrap a mover error with the move that produced it
    pub fn vector_combination_failed(phase: ExplorePhase, source: Error) -> Self {
        if source.passes_through() {
            return source;
        }
        Self::VectorCombinationFailed {
            phase,
            source: Box::new(source),
        }
    }

    /// Wrap a searcher error
    pub fn search_failed(source: Error) -> Self {
        if source.passes_through() {
            return source;
        }
        Self::SearchFailed {
            source: Box::new(source),
        }
    }

    fn passes_through(&self) -> bool {
        self.is_denied() || self.is_cancelled()
    }
}

// Inspection methods
impl Error {
    /// True when the principal was refused access
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::AuthorizationDenied { .. })
    }

    /// True when the request was cancelled or ran out of time
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::TimedOut { .. })
    }

    /// Pipeline stage the error was raised in, if it came from the explorer
    pub fn phase(&self) -> Option<ExplorePhase> {
        match self {
            Self::EmbeddingFailed { phase, .. }
            | Self::VectorCombinationFailed { phase, .. }
            | Self::Cancelled { phase } => Some(*phase),
            Self::SearchFailed { .. } => Some(ExplorePhase::VectorSearch),
            Self::AuthorizationDenied { .. } => Some(ExplorePhase::Authorization),
            _ => None,
        }
    }

    /// The collaborator error wrapped by a pipeline stage, if any
    pub fn inner(&self) -> Option<&Error> {
        match self {
            Self::EmbeddingFailed { source, .. }
            | Self::VectorCombinationFailed { source, .. }
            | Self::SearchFailed { source } => Some(source),
            _ => None,
        }
    }
}
