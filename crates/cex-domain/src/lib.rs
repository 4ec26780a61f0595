//! # Concept Explorer - Domain Layer
//!
//! Core types of the concept explorer: the exploration request, the
//! annotated search hit, the error taxonomy and the ports through which
//! the application layer talks to embedders, vector movers, vector
//! searchers and authorizers.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Explore parameters, search results, embeddings, principals, beacons |
//! | [`ports`] | Collaborator contracts implemented by `cex-providers` |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Fixed action/resource pattern, search category, beacon defaults |
//!
//! The domain layer has no knowledge of how vectors are produced or
//! stored. It only fixes the shapes exchanged across the ports.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    BeaconFormatter, Embedding, ExploreMove, ExploreParams, ExplorePhase, Kind, Principal,
    VectorSearchResult,
};
