//! # Concept Explorer
//!
//! Vector-similarity exploration of concepts: embed a set of search terms,
//! optionally steer the query vector toward or away from other term
//! clusters, and return the nearest concepts annotated with beacons.
//!
//! ## Example
//!
//! ```ignore
//! use cex::domain::{ExploreMove, ExploreParams};
//! use cex::infrastructure::{config::ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let params = ExploreParams::new(["cat", "dog"])
//!     .with_limit(10)
//!     .with_move_to(ExploreMove::new(["food"], 0.5));
//! let results = context
//!     .explore_service()
//!     .explore_concepts(&cancel, None, &params)
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and the error taxonomy
//! - `application` - explore use case and provider registries
//! - `providers` - embedders, movers, vector indexes and authorizers
//! - `infrastructure` - configuration, logging and composition root
//! - `cli` - the `cex` command line

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cex_domain::*;
}

/// Application layer - explore use case and registries
pub mod application {
    pub use cex_application::*;
}

/// Provider implementations
pub mod providers {
    pub use cex_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use cex_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;
