//! Explore request configuration

use cex_domain::constants::{DEFAULT_BEACON_HOST, DEFAULT_BEACON_SCHEME};
use cex_domain::value_objects::BeaconFormatter;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings applied to every explore request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Scheme of result beacons
    pub beacon_scheme: String,
    /// Host of result beacons
    pub beacon_host: String,
    /// Request deadline in milliseconds
    pub timeout_ms: Option<u64>,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            beacon_scheme: DEFAULT_BEACON_SCHEME.to_string(),
            beacon_host: DEFAULT_BEACON_HOST.to_string(),
            timeout_ms: None,
        }
    }
}

impl ExploreConfig {
    /// Beacon formatter for the configured scheme and host
    pub fn beacons(&self) -> BeaconFormatter {
        BeaconFormatter::new(&self.beacon_scheme, &self.beacon_host)
    }

    /// Request deadline, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
