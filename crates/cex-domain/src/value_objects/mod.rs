//! Domain Value Objects
//!
//! Value objects exchanged between the explorer and its collaborators.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ExploreParams`] | One exploratory search request |
//! | [`ExploreMove`] | Directional nudge toward or away from a concept cluster |
//! | [`ExplorePhase`] | Pipeline stage, used to give errors context |
//! | [`VectorSearchResult`] | One search hit, annotated with a beacon |
//! | [`Kind`] | Category of a matched entity |
//! | [`Embedding`] | Vector representation of a corpus of terms |
//! | [`Principal`] | Authenticated identity making a request |
//! | [`BeaconFormatter`] | Builds canonical locators for results |

/// Beacon locator formatting
pub mod beacon;
/// Semantic embedding value objects
pub mod embedding;
/// Exploration request value objects
pub mod explore;
/// Request principal
pub mod principal;
/// Search result value objects
pub mod search;

pub use beacon::BeaconFormatter;
pub use embedding::Embedding;
pub use explore::{ExploreMove, ExploreParams, ExplorePhase};
pub use principal::Principal;
pub use search::{Kind, VectorSearchResult};
