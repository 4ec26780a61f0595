//! Authorizer Registry

use std::sync::Arc;

use crate::ports::Authorizer;

/// Configuration for authorizer creation
#[derive(Debug, Clone, Default)]
pub struct AuthorizerConfig {
    /// Authorizer name (e.g., "allow_all", "admin_list")
    pub provider: String,
    /// Users allowed to perform any verb
    pub admin_users: Vec<String>,
    /// Users allowed to perform read verbs
    pub read_only_users: Vec<String>,
    /// Whether requests without a principal may read
    pub allow_anonymous: bool,
}

impl AuthorizerConfig {
    /// Create a new config with the given authorizer name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the admin users
    #[must_use]
    pub fn with_admin_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_users = users.into_iter().map(Into::into).collect();
        self
    }

    /// Set the read-only users
    #[must_use]
    pub fn with_read_only_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_only_users = users.into_iter().map(Into::into).collect();
        self
    }

    /// Allow anonymous reads
    #[must_use]
    pub fn with_anonymous_access(mut self, allow: bool) -> Self {
        self.allow_anonymous = allow;
        self
    }
}

/// Registry entry for authorizers
pub struct AuthorizerEntry {
    /// Unique authorizer name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create authorizer instance
    pub factory: fn(&AuthorizerConfig) -> Result<Arc<dyn Authorizer>, String>,
}

#[linkme::distributed_slice]
pub static AUTHORIZERS: [AuthorizerEntry] = [..];

/// Resolve authorizer by name from registry
pub fn resolve_authorizer(config: &AuthorizerConfig) -> Result<Arc<dyn Authorizer>, String> {
    let provider_name = &config.provider;

    for entry in AUTHORIZERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = AUTHORIZERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown authorizer '{provider_name}'. Available authorizers: {available:?}"
    ))
}

/// List all registered authorizers
pub fn list_authorizers() -> Vec<(&'static str, &'static str)> {
    AUTHORIZERS.iter().map(|e| (e.name, e.description)).collect()
}
