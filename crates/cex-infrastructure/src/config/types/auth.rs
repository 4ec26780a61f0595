//! Authorization configuration types

use cex_application::ports::registry::AuthorizerConfig;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AUTHORIZER;

/// Authorization configuration
///
/// The user lists are only read by the `admin_list` authorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Authorizer name (`allow_all` or `admin_list`)
    pub authorizer: String,
    /// Users allowed to perform any verb
    pub admin_users: Vec<String>,
    /// Users allowed to read
    pub read_only_users: Vec<String>,
    /// Whether requests without a user may read
    pub allow_anonymous: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authorizer: DEFAULT_AUTHORIZER.to_string(),
            admin_users: Vec::new(),
            read_only_users: Vec::new(),
            allow_anonymous: false,
        }
    }
}

impl AuthConfig {
    /// Registry configuration for the selected authorizer
    pub fn to_registry_config(&self) -> AuthorizerConfig {
        AuthorizerConfig::new(&self.authorizer)
            .with_admin_users(self.admin_users.iter().cloned())
            .with_read_only_users(self.read_only_users.iter().cloned())
            .with_anonymous_access(self.allow_anonymous)
    }
}
