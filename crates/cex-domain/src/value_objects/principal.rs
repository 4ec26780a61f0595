//! Request principal

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated identity making a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// User name
    pub username: String,
    /// Groups the user belongs to
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Principal {
    /// Create a principal without groups
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            groups: Vec::new(),
        }
    }

    /// Add group memberships
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Name used in denial messages; `None` renders as "anonymous"
    pub fn display_name(principal: Option<&Principal>) -> String {
        principal.map_or_else(|| "anonymous".to_string(), |p| format!("user '{p}'"))
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
