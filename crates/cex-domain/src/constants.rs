//! Domain layer constants
//!
//! Values that are part of the explore contract itself. Provider and
//! infrastructure defaults live in their own crates.

// ============================================================================
// AUTHORIZATION
// ============================================================================

/// Verb checked before any exploration work is done
pub const TRAVERSAL_VERB: &str = "get";

/// Resource pattern covering every traversal result
pub const TRAVERSAL_RESOURCE: &str = "traversal/*";

/// Verbs that only read data
pub const READ_VERBS: &[&str] = &["get", "list"];

// ============================================================================
// SEARCH
// ============================================================================

/// Result-set category passed to the vector searcher for concept exploration
pub const CONCEPTS_CATEGORY: &str = "concepts";

// ============================================================================
// BEACONS
// ============================================================================

/// Default scheme of result beacons
pub const DEFAULT_BEACON_SCHEME: &str = "weaviate";

/// Default host of result beacons
pub const DEFAULT_BEACON_HOST: &str = "localhost";
