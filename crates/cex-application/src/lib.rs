//! Application Layer - Concept Explorer
//!
//! Implements the explore use case and orchestrates the collaborator ports
//! defined in `cex-domain`.
//!
//! ## Use Cases
//!
//! - Concept exploration: authorize → vectorize (+ moves) → search → annotate
//!
//! ## Ports
//!
//! - `ports::*`: re-exported domain ports
//! - `ports::registry::*`: compile-time registries used to pick a provider by name
//! - `domain_services::*`: use case interfaces
//!
//! ## Dependencies
//!
//! This crate depends only on `cex-domain` and pure async/logging libraries.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
