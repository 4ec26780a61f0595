//! Authorizer that permits every request

use std::sync::Arc;

use tracing::trace;

use cex_application::ports::registry::{AUTHORIZERS, AuthorizerConfig, AuthorizerEntry};
use cex_domain::error::Result;
use cex_domain::ports::Authorizer;
use cex_domain::value_objects::Principal;

/// Permits every principal, including anonymous ones
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllAuthorizer;

impl AllowAllAuthorizer {
    /// Create a new allow-all authorizer
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for AllowAllAuthorizer {
    fn authorize(&self, principal: Option<&Principal>, verb: &str, resource: &str) -> Result<()> {
        trace!(principal = %Principal::display_name(principal), verb, resource, "allowed");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "allow_all"
    }
}

fn allow_all_factory(_config: &AuthorizerConfig) -> std::result::Result<Arc<dyn Authorizer>, String> {
    Ok(Arc::new(AllowAllAuthorizer::new()))
}

#[linkme::distributed_slice(AUTHORIZERS)]
static ALLOW_ALL_AUTHORIZER: AuthorizerEntry = AuthorizerEntry {
    name: "allow_all",
    description: "Permits every request (no authorization)",
    factory: allow_all_factory,
};
