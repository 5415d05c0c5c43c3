//! Damped spring animation primitives for UI motion.
//!
//! `recoil` drives a value (or an x/y pair) toward a target with a simulated
//! damped harmonic oscillator, stepping once per frame and notifying an
//! observer after every step so the host can re-render.
//!
//! # Features
//!
//! - **Retargetable**: moving the target mid-flight keeps position and
//!   velocity, so an interrupted animation never snaps
//! - **Exact rest**: settled springs sit exactly on their target with zero velocity
//! - **Stable stepping**: semi-implicit Euler, long frames split into stable sub-steps of at most 4 ms
//! - **Host lifecycle**: `attach`/`detach` start and stop stepping
//! - **Two axes**: `Spring2D` composes two independent `Spring1D`s
//! - **`no_std` compatible**: disable the default `std` feature
//!
//! ```
//! use recoil::{Spring2D, SpringConfig, Vec2};
//!
//! let mut follower: Spring2D<f64> =
//!     Spring2D::at(SpringConfig::default_motion(), Vec2::new(0.0, 0.0)).unwrap();
//! follower.attach();
//! follower.set_to_position(Vec2::new(120.0, 40.0));
//! for frame in 0..240 {
//!     follower.tick(frame as f64 * 16.0);
//! }
//! assert!(follower.is_at_rest());
//! assert_eq!(follower.current_position(), Vec2::new(120.0, 40.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod float;
pub mod vec;
pub mod config;
pub mod error;
pub mod observer;
pub mod clock;
pub mod spring;
pub mod spring2d;
mod logging;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec2, Position2D};
pub use config::{SpringConfig, SpringConfigUpdate};
pub use error::SpringError;
pub use observer::{UpdateObserver, NoOpUpdateObserver};
pub use clock::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use spring::{Spring1D, SpringStatus, MAX_FRAME_MS, MAX_SUB_STEPS, MAX_SUB_STEP_MS};
pub use spring2d::Spring2D;
