//! Authorization Port
//!
//! Defines the contract for permission decisions.

use crate::error::Result;
use crate::value_objects::Principal;

/// Authorization interface
///
/// Returns `Ok(())` when `principal` may perform `verb` on `resource`, and
/// [`Error::AuthorizationDenied`](crate::error::Error::AuthorizationDenied)
/// otherwise. A `None` principal is an anonymous request.
pub trait Authorizer: Send + Sync {
    /// Decide whether the request is permitted
    fn authorize(&self, principal: Option<&Principal>, verb: &str, resource: &str) -> Result<()>;

    /// Identifier of the implementation (e.g. "allow_all")
    fn provider_name(&self) -> &str;
}
