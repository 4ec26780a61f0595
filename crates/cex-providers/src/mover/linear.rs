//! Linear Vector Mover
//!
//! Shifts a vector along the straight line through `source` and `target`:
//!
//! ```text
//! move_to(s, t, f)        = s * (1 - f*m) + t * (f*m)
//! move_away_from(s, t, f) = s * (1 + f*m) - t * (f*m)
//! ```
//!
//! with `m` the force multiplier (0.5). Forces are bounded by `max_force`,
//! so a full-strength move toward a target lands halfway between the two.

use std::sync::Arc;

use cex_application::ports::registry::{VECTOR_MOVERS, VectorMoverConfig, VectorMoverEntry};
use cex_domain::error::{Error, Result};
use cex_domain::ports::VectorMover;

use crate::constants::{MOVE_FORCE_MULTIPLIER, MOVE_MAX_FORCE};

/// Linear interpolation mover
#[derive(Debug, Clone)]
pub struct LinearVectorMover {
    max_force: f32,
}

impl LinearVectorMover {
    /// Create a mover accepting forces up to 1.0
    pub fn new() -> Self {
        Self {
            max_force: MOVE_MAX_FORCE,
        }
    }

    /// Create a mover with a custom force bound
    ///
    /// The bound must be finite, positive and no larger than `1 / 0.5`,
    /// past which a move toward the target would overshoot it.
    pub fn with_max_force(max_force: f32) -> Result<Self> {
        if !max_force.is_finite() || max_force <= 0.0 || max_force * MOVE_FORCE_MULTIPLIER > 1.0 {
            return Err(Error::movement(format!(
                "max force must be in (0, {}], got {max_force}",
                1.0 / MOVE_FORCE_MULTIPLIER
            )));
        }
        Ok(Self { max_force })
    }

    /// Largest accepted force
    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    fn validate(&self, source: &[f32], target: &[f32], force: f32) -> Result<()> {
        if !force.is_finite() {
            return Err(Error::movement(format!("force must be finite, got {force}")));
        }
        if force <= 0.0 {
            return Err(Error::movement(format!(
                "force must be greater than 0, got {force}"
            )));
        }
        if force > self.max_force {
            return Err(Error::movement(format!(
                "force {force} exceeds the maximum of {}",
                self.max_force
            )));
        }
        if source.is_empty() || target.is_empty() {
            return Err(Error::movement("cannot move an empty vector"));
        }
        if source.len() != target.len() {
            return Err(Error::movement(format!(
                "vector dimensions differ: source has {}, target has {}",
                source.len(),
                target.len()
            )));
        }
        Ok(())
    }
}

impl Default for LinearVectorMover {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorMover for LinearVectorMover {
    fn move_to(&self, source: &[f32], target: &[f32], force: f32) -> Result<Vec<f32>> {
        self.validate(source, target, force)?;
        let weight = force * MOVE_FORCE_MULTIPLIER;
        Ok(source
            .iter()
            .zip(target)
            .map(|(s, t)| s * (1.0 - weight) + t * weight)
            .collect())
    }

    fn move_away_from(&self, source: &[f32], target: &[f32], force: f32) -> Result<Vec<f32>> {
        self.validate(source, target, force)?;
        let weight = force * MOVE_FORCE_MULTIPLIER;
        Ok(source
            .iter()
            .zip(target)
            .map(|(s, t)| s * (1.0 + weight) - t * weight)
            .collect())
    }

    fn provider_name(&self) -> &str {
        "linear"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn linear_factory(config: &VectorMoverConfig) -> std::result::Result<Arc<dyn VectorMover>, String> {
    let mover = match config.max_force {
        Some(max_force) => LinearVectorMover::with_max_force(max_force).map_err(|e| e.to_string())?,
        None => LinearVectorMover::new(),
    };
    Ok(Arc::new(mover))
}

#[linkme::distributed_slice(VECTOR_MOVERS)]
static LINEAR_MOVER: VectorMoverEntry = VectorMoverEntry {
    name: "linear",
    description: "Linear interpolation toward / extrapolation away from a target vector",
    factory: linear_factory,
};
