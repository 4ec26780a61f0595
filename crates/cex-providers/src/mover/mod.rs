//! Vector Mover Implementations
//!
//! | Mover | Formula |
//! |-------|---------|
//! | LinearVectorMover | Weighted linear interpolation / extrapolation |

pub mod linear;

pub use linear::LinearVectorMover;
