use crate::error::Result;

/// Vector Movement Interface
///
/// Pure vector arithmetic: shifts `source` toward or away from `target`
/// by a positive `force`. Implementations must
///
/// - return a vector with the dimensionality of `source`
/// - be deterministic for identical inputs
/// - move further toward/away from `target` as `force` grows, within the
///   bounds they accept
/// - reject a non-positive force, or mismatched dimensions, with
///   [`Error::Movement`](crate::error::Error::Movement) instead of
///   producing a vector
pub trait VectorMover: Send + Sync {
    /// Move `source` toward `target`
    fn move_to(&self, source: &[f32], target: &[f32], force: f32) -> Result<Vec<f32>>;

    /// Move `source` away from `target`
    fn move_away_from(&self, source: &[f32], target: &[f32], force: f32) -> Result<Vec<f32>>;

    /// Identifier of the implementation (e.g. "linear")
    fn provider_name(&self) -> &str;
}
