//! Admin list authorizer
//!
//! Static policy built from two user lists:
//!
//! - admins may perform any verb on any resource
//! - read-only users may perform read verbs (`get`, `list`)
//! - anonymous requests may read only when anonymous access is enabled
//!
//! Everything else is denied.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use cex_application::ports::registry::{AUTHORIZERS, AuthorizerConfig, AuthorizerEntry};
use cex_domain::constants::READ_VERBS;
use cex_domain::error::{Error, Result};
use cex_domain::ports::Authorizer;
use cex_domain::value_objects::Principal;

/// Authorizer backed by admin and read-only user lists
#[derive(Debug, Clone, Default)]
pub struct AdminListAuthorizer {
    admins: HashSet<String>,
    read_only: HashSet<String>,
    allow_anonymous: bool,
}

impl AdminListAuthorizer {
    /// Build the authorizer, rejecting users listed as both admin and read-only
    pub fn new<A, R>(admins: A, read_only: R, allow_anonymous: bool) -> Result<Self>
    where
        A: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        let admins: HashSet<String> = admins.into_iter().collect();
        let read_only: HashSet<String> = read_only.into_iter().collect();

        let mut both: Vec<&String> = admins.intersection(&read_only).collect();
        if !both.is_empty() {
            both.sort();
            return Err(Error::config(format!(
                "users {both:?} are listed as both admin and read-only"
            )));
        }

        Ok(Self {
            admins,
            read_only,
            allow_anonymous,
        })
    }

    fn is_read(verb: &str) -> bool {
        READ_VERBS.contains(&verb)
    }

    fn permits(&self, principal: Option<&Principal>, verb: &str) -> bool {
        match principal {
            None => self.allow_anonymous && Self::is_read(verb),
            Some(p) if self.admins.contains(&p.username) => true,
            Some(p) => self.read_only.contains(&p.username) && Self::is_read(verb),
        }
    }
}

impl Authorizer for AdminListAuthorizer {
    fn authorize(&self, principal: Option<&Principal>, verb: &str, resource: &str) -> Result<()> {
        if self.permits(principal, verb) {
            return Ok(());
        }
        let name = Principal::display_name(principal);
        debug!(principal = %name, verb, resource, "admin list denied request");
        Err(Error::denied(name, verb, resource))
    }

    fn provider_name(&self) -> &str {
        "admin_list"
    }
}

fn admin_list_factory(config: &AuthorizerConfig) -> std::result::Result<Arc<dyn Authorizer>, String> {
    let authorizer = AdminListAuthorizer::new(
        config.admin_users.iter().cloned(),
        config.read_only_users.iter().cloned(),
        config.allow_anonymous,
    )
    .map_err(|e| e.to_string())?;
    Ok(Arc::new(authorizer))
}

#[linkme::distributed_slice(AUTHORIZERS)]
static ADMIN_LIST_AUTHORIZER: AuthorizerEntry = AuthorizerEntry {
    name: "admin_list",
    description: "Static admin / read-only user lists",
    factory: admin_list_factory,
};
