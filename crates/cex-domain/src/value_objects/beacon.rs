//! Beacon locator formatting
//!
//! A beacon is a canonical reference of the shape
//! `<scheme>://<host>/<kind-plural>/<id>`.

use crate::constants::{DEFAULT_BEACON_HOST, DEFAULT_BEACON_SCHEME};
use crate::value_objects::{Kind, VectorSearchResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Builds beacons for a fixed scheme and host
///
/// ```rust
/// use cex_domain::value_objects::{BeaconFormatter, Kind};
/// use uuid::Uuid;
///
/// let beacons = BeaconFormatter::default();
/// let id = Uuid::nil();
/// assert_eq!(
///     beacons.format(Kind::Thing, &id),
///     "weaviate://localhost/things/00000000-0000-0000-0000-000000000000"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconFormatter {
    scheme: String,
    host: String,
}

impl BeaconFormatter {
    /// Create a formatter for the given scheme and host
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Scheme part of produced beacons
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host part of produced beacons
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Beacon for an entity of the given kind and id
    pub fn format(&self, kind: Kind, id: &Uuid) -> String {
        format!("{}://{}/{}/{}", self.scheme, self.host, kind.plural(), id)
    }

    /// Beacon for a search result
    pub fn for_result(&self, result: &VectorSearchResult) -> String {
        self.format(result.kind, &result.id)
    }
}

impl Default for BeaconFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_BEACON_SCHEME, DEFAULT_BEACON_HOST)
    }
}
