//! Error types for spring configuration.

use thiserror::Error;

/// Rejected spring configuration.
///
/// Each variant carries the offending value, widened to `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    /// Stiffness must be positive and finite.
    #[error("stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f64),
    /// Damping must be non-negative and finite.
    #[error("damping must be non-negative and finite, got {0}")]
    InvalidDamping(f64),
    /// Rest displacement threshold must be non-negative.
    #[error("rest displacement threshold must be non-negative, got {0}")]
    InvalidRestDisplacementThreshold(f64),
    /// Rest velocity threshold must be non-negative.
    #[error("rest velocity threshold must be non-negative, got {0}")]
    InvalidRestVelocityThreshold(f64),
}
