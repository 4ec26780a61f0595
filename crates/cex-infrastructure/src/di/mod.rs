//! Composition root
//!
//! Resolves the configured providers from the linkme registries and wires
//! them into the explore service.

pub mod bootstrap;

pub use bootstrap::{AppContext, ProviderListing, available_providers, init_app};
